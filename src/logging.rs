use colored::Colorize;

/// Log a generator event as `[component][event] message`.
pub fn log_event(component: &str, event: &str, message: &str) {
    println!("[{}][{}] {}", component.cyan(), event, message);
}

pub fn log_claim_event(component: &str, claim_id: &str, event: &str, message: &str) {
    println!(
        "[{}][claim:{}][{}] {}",
        component.cyan(),
        claim_id,
        event,
        message
    );
}
