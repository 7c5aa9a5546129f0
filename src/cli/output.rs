//! Output formatting for CLI

use crate::pipeline::TrainingResult;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the headline numbers of a training run
pub fn print_training_result(result: &TrainingResult) {
    print_kv("Learner", &result.learner);
    print_kv("Environment", &result.environment);
    print_kv("Episodes", &format_number(result.total_episodes));
    print_kv("Completed", &format_number(result.completed_episodes));
    print_kv("Steps", &format_number(result.total_steps));
    print_kv(
        "Mean reward",
        &format!("{:.4}", result.mean_reward_per_episode),
    );
    print_kv("Mean steps", &format!("{:.2}", result.mean_steps_per_episode));
    print_kv("Final reward", &format!("{:.4}", result.final_window_reward));
}
