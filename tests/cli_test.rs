use std::process::{Command, Output};

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slidemaster"))
        .args(args)
        .env("SLIDEMASTER_GENERATION_DELAY_MS", "0")
        .env_remove("SLIDEMASTER_DEFAULT_SORT")
        .output()
        .expect("Failed to execute command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_list_command_default_sort() {
    let output = run_command(&["list"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("The Water Cycle | 3 slides"));
    assert!(lines[0].ends_with("Last edited: November 8, 2025"));
    assert!(lines[2].starts_with("Parts of Speech | 2 slides"));
}

#[test]
fn test_list_command_with_query_and_sort() {
    let output = run_command(&["list", "--query", "S", "--sort", "title-asc"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let titles: Vec<_> = stdout_lines(&output)
        .into_iter()
        .map(|line| line.split(" | ").next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["Parts of Speech", "Solar System Basics"]);
}

#[test]
fn test_list_command_rejects_unknown_sort() {
    let output = run_command(&["list", "--sort", "newest"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown sort key"), "stderr: {}", stderr);
}

#[test]
fn test_list_command_json() {
    let output = run_command(&["list", "--query", "water", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let decks = parsed.as_array().expect("a JSON array");
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0]["title"], "The Water Cycle");
    assert_eq!(decks[0]["slides"][0]["type"], "title");
}

#[test]
fn test_generate_command() {
    let output = run_command(&["generate", "--prompt", "Photosynthesis for 7th graders"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Generating your slides..."));
    assert!(text.contains("Slide 1: Photosynthesis for 7th graders"));
    assert!(text.contains("Slide 2: Overview"));
    assert!(text.contains("  • Key point 1"));
}

#[test]
fn test_generate_command_rejects_blank_prompt() {
    let output = run_command(&["generate", "--prompt", "   "]);
    assert!(!output.status.success());
}

#[test]
fn test_show_command() {
    let output = run_command(&["show", "--title", "speech"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Parts of Speech");
    assert!(lines.contains(&"Slide 2: Nouns".to_string()));
    assert!(lines.contains(&"  Notes: Start with nouns as they are fundamental.".to_string()));
}

#[test]
fn test_show_command_unknown_title() {
    let output = run_command(&["show", "--title", "chemistry"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Input validation error: No presentation matches \"chemistry\""),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Unknown error"));
}
