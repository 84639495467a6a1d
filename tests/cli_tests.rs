//! CLI argument parsing tests
//!
//! Run with: cargo test --test cli_tests

use clap::Parser;
use robolearn::cli::{Cli, Commands, CoursesAction, LearnAction, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).expect("arguments should parse")
}

#[test]
fn test_login_requires_email() {
    assert!(Cli::try_parse_from(["robolearn", "login"]).is_err());
    let cli = parse(&["robolearn", "login", "--email", "a@b.com"]);
    match cli.command {
        Commands::Login { email, password } => {
            assert_eq!(email, "a@b.com");
            assert!(password.is_none());
        }
        _ => panic!("expected login command"),
    }
}

#[test]
fn test_register_takes_name_and_email() {
    let cli = parse(&[
        "robolearn", "register", "--email", "a@b.com", "--name", "Ada",
    ]);
    match cli.command {
        Commands::Register { email, name, .. } => {
            assert_eq!(email, "a@b.com");
            assert_eq!(name, "Ada");
        }
        _ => panic!("expected register command"),
    }
}

#[test]
fn test_courses_list_filters() {
    let cli = parse(&[
        "robolearn", "courses", "list", "--level", "beginner", "--search", "arms", "--format",
        "json",
    ]);
    match cli.command {
        Commands::Courses {
            action:
                CoursesAction::List {
                    level,
                    search,
                    format,
                    ..
                },
        } => {
            assert!(level.is_some());
            assert_eq!(search.as_deref(), Some("arms"));
            assert!(matches!(format, OutputFormat::Json));
        }
        _ => panic!("expected courses list command"),
    }
}

#[test]
fn test_courses_list_default_format_is_table() {
    let cli = parse(&["robolearn", "courses", "list"]);
    match cli.command {
        Commands::Courses {
            action: CoursesAction::List { format, .. },
        } => assert!(matches!(format, OutputFormat::Table)),
        _ => panic!("expected courses list command"),
    }
}

#[test]
fn test_quiz_answers_are_positional() {
    let cli = parse(&["robolearn", "learn", "quiz", "q1", "0=2", "1=0"]);
    match cli.command {
        Commands::Learn {
            action: LearnAction::Quiz { quiz_id, answers },
        } => {
            assert_eq!(quiz_id, "q1");
            assert_eq!(answers, vec!["0=2", "1=0"]);
        }
        _ => panic!("expected learn quiz command"),
    }
}

#[test]
fn test_quiz_requires_at_least_one_answer() {
    assert!(Cli::try_parse_from(["robolearn", "learn", "quiz", "q1"]).is_err());
}

#[test]
fn test_delete_commands_accept_force() {
    let cli = parse(&["robolearn", "courses", "delete", "c1", "--force"]);
    match cli.command {
        Commands::Courses {
            action: CoursesAction::Delete { id, force },
        } => {
            assert_eq!(id, "c1");
            assert!(force);
        }
        _ => panic!("expected courses delete command"),
    }
}

#[test]
fn test_invalid_level_is_rejected() {
    assert!(Cli::try_parse_from(["robolearn", "courses", "list", "--level", "expert"]).is_err());
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["robolearn", "frobnicate"]).is_err());
}
