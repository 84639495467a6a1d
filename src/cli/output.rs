//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use indicatif::ProgressBar;
use std::future::Future;
use std::time::Duration;

use crate::api::models::{
    AccessLink, Certificate, ContactInquiry, Course, CourseStatus, InstructorAvailability,
    LearningPath, MentoringSession, Product, Section, SessionStatus, User, UserProgress, UserRole,
};
use crate::error::Error;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Render an error, listing offending fields beneath validation errors
pub fn render_error(err: &Error) {
    error(&err.to_string());
    if let Some(fields) = err.fields() {
        for field in fields {
            eprintln!("    - {}", field);
        }
    }
}

/// Show a spinner while a request is in flight
pub async fn with_spinner<F, T>(message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = fut.await;
    spinner.finish_and_clear();
    result
}

/// Format a role as a colored string
pub fn format_role(role: UserRole) -> String {
    match role {
        UserRole::Admin => role.to_string().red().to_string(),
        UserRole::Instructor => role.to_string().yellow().to_string(),
        UserRole::Student => role.to_string().blue().to_string(),
    }
}

fn format_course_status(status: CourseStatus) -> String {
    match status {
        CourseStatus::Published => "PUBLISHED".green().to_string(),
        CourseStatus::Draft => "DRAFT".yellow().to_string(),
        CourseStatus::Archived => "ARCHIVED".red().to_string(),
    }
}

fn header_cells(titles: &[&str]) -> Vec<Cell> {
    titles.iter().map(|t| Cell::new(t).fg(Color::Cyan)).collect()
}

fn new_table(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header_cells(titles));
    table
}

/// Print the current identity
pub fn print_user_detail(user: &User) {
    println!("{}", "Profile".bold().underline());
    println!();
    println!("  {} {}", "Name:".bold(), user.profile_data.name);
    println!("  {} {}", "Email:".bold(), user.email);
    println!("  {} {}", "Role:".bold(), format_role(user.role));
    println!("  {} {}", "Id:".bold(), user.id);

    if let Some(bio) = &user.profile_data.bio {
        println!("  {} {}", "Bio:".bold(), bio);
    }
    if let Some(phone) = &user.profile_data.phone {
        println!("  {} {}", "Phone:".bold(), phone);
    }
    println!(
        "  {} {}",
        "Member since:".bold(),
        user.created_at.format("%Y-%m-%d")
    );
}

/// Print a table of courses
pub fn print_course_table(courses: &[Course]) {
    if courses.is_empty() {
        info("No courses found");
        return;
    }

    let mut table = new_table(&["Id", "Title", "Category", "Level", "Price", "Rating", "Status"]);
    for course in courses {
        let rating = course
            .average_rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(&course.id),
            Cell::new(&course.title),
            Cell::new(&course.category),
            Cell::new(format!("{:?}", course.level)),
            Cell::new(format!("${:.2}", course.price)),
            Cell::new(rating),
            Cell::new(format_course_status(course.status)),
        ]);
    }

    println!("{table}");
}

/// Print detailed course info
pub fn print_course_detail(course: &Course) {
    println!("{}", course.title.bold().underline());
    println!();
    println!("  {} {}", "Id:".bold(), course.id);
    println!("  {} {}", "Category:".bold(), course.category);
    println!("  {} {:?}", "Level:".bold(), course.level);
    println!("  {} ${:.2}", "Price:".bold(), course.price);
    println!("  {} {}", "Language:".bold(), course.language);
    println!(
        "  {} {}",
        "Status:".bold(),
        format_course_status(course.status)
    );

    if let Some(rating) = course.average_rating {
        let reviews = course.total_reviews.unwrap_or(0);
        println!("  {} {:.1} ({} reviews)", "Rating:".bold(), rating, reviews);
    }
    if let Some(enrollments) = course.total_enrollments {
        println!("  {} {}", "Enrollments:".bold(), enrollments);
    }

    println!();
    println!("  {}", course.description);

    if let Some(points) = &course.what_you_will_learn {
        println!();
        println!("  {}", "What you will learn:".bold());
        for point in points {
            println!("    - {}", point);
        }
    }
}

/// Print a course's section/lesson tree
pub fn print_lesson_tree(sections: &[Section]) {
    if sections.is_empty() {
        info("This course has no content yet");
        return;
    }

    for section in sections {
        println!("{}", section.title.bold());
        for lesson in &section.lessons {
            let marker = if lesson.is_free {
                "○".green()
            } else {
                "●".blue()
            };
            let duration = lesson
                .duration
                .map(|m| format!(" ({} min)", m))
                .unwrap_or_default();
            println!("  {} {}{}", marker, lesson.title, duration);
        }
    }
}

/// Print a table of learning progress
pub fn print_progress_table(progress: &[UserProgress]) {
    if progress.is_empty() {
        info("No enrolled courses. Browse the catalog with 'robolearn courses list'");
        return;
    }

    let mut table = new_table(&["Course", "Status", "Progress", "Lessons", "Enrolled"]);
    for entry in progress {
        let status_color = match entry.completion_status {
            crate::api::models::CompletionStatus::Completed => Color::Green,
            crate::api::models::CompletionStatus::InProgress => Color::Yellow,
            crate::api::models::CompletionStatus::NotStarted => Color::Grey,
        };

        table.add_row(vec![
            Cell::new(&entry.course_title),
            Cell::new(format!("{:?}", entry.completion_status)).fg(status_color),
            Cell::new(format!("{:.0}%", entry.progress)),
            Cell::new(format!(
                "{}/{}",
                entry.completed_lessons, entry.total_lessons
            )),
            Cell::new(entry.enrollment_date.format("%Y-%m-%d").to_string()),
        ]);
    }

    println!("{table}");
}

/// Print a table of certificates
pub fn print_certificate_table(certificates: &[Certificate]) {
    if certificates.is_empty() {
        info("No certificates yet");
        return;
    }

    let mut table = new_table(&["Id", "Course", "Code", "Issued"]);
    for cert in certificates {
        table.add_row(vec![
            Cell::new(&cert.id),
            Cell::new(&cert.metadata.course_name),
            Cell::new(&cert.certificate_code),
            Cell::new(cert.issued_at.format("%Y-%m-%d").to_string()),
        ]);
    }

    println!("{table}");
}

/// Print a table of learning paths
pub fn print_path_table(paths: &[LearningPath]) {
    if paths.is_empty() {
        info("No learning paths found");
        return;
    }

    let mut table = new_table(&["Id", "Title", "Difficulty", "Courses", "Published"]);
    for path in paths {
        table.add_row(vec![
            Cell::new(&path.id),
            Cell::new(&path.title),
            Cell::new(format!("{:?}", path.difficulty)),
            Cell::new(path.total_courses),
            Cell::new(if path.is_published { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
}

/// Print a table of products
pub fn print_product_table(products: &[Product]) {
    if products.is_empty() {
        info("No products found");
        return;
    }

    let mut table = new_table(&["Id", "Title", "Features", "Published"]);
    for product in products {
        table.add_row(vec![
            Cell::new(&product.id),
            Cell::new(&product.title),
            Cell::new(product.features.len()),
            Cell::new(if product.is_published { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
}

/// Print a table of contact inquiries
pub fn print_inquiry_table(inquiries: &[ContactInquiry]) {
    if inquiries.is_empty() {
        info("No inquiries found");
        return;
    }

    let mut table = new_table(&["Id", "From", "Subject", "Status", "Received"]);
    for inquiry in inquiries {
        let status_color = match inquiry.status {
            crate::api::models::InquiryStatus::New => Color::Yellow,
            crate::api::models::InquiryStatus::InProgress => Color::Blue,
            crate::api::models::InquiryStatus::Resolved => Color::Green,
        };

        table.add_row(vec![
            Cell::new(&inquiry.id),
            Cell::new(format!("{} <{}>", inquiry.name, inquiry.email)),
            Cell::new(&inquiry.subject),
            Cell::new(inquiry.status.to_string()).fg(status_color),
            Cell::new(inquiry.created_at.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }

    println!("{table}");
}

/// Print a table of mentoring sessions
pub fn print_session_table(sessions: &[MentoringSession]) {
    if sessions.is_empty() {
        info("No mentoring sessions");
        return;
    }

    let mut table = new_table(&["Id", "Topic", "With", "When", "Duration", "Status"]);
    for session in sessions {
        let with = session
            .instructor
            .as_ref()
            .map(|i| i.name().to_string())
            .or_else(|| session.student.as_ref().map(|s| s.name().to_string()))
            .unwrap_or_else(|| "-".to_string());

        let status_color = match session.status {
            SessionStatus::Scheduled => Color::Yellow,
            SessionStatus::Completed => Color::Green,
            _ => Color::Red,
        };

        table.add_row(vec![
            Cell::new(&session.id),
            Cell::new(&session.topic),
            Cell::new(with),
            Cell::new(session.scheduled_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::new(format!("{} min", session.duration)),
            Cell::new(format!("{:?}", session.status)).fg(status_color),
        ]);
    }

    println!("{table}");
}

/// Print a table of availability windows
pub fn print_availability_table(windows: &[InstructorAvailability]) {
    if windows.is_empty() {
        info("No availability configured");
        return;
    }

    let mut table = new_table(&["Id", "Day", "From", "To", "Active"]);
    for window in windows {
        table.add_row(vec![
            Cell::new(&window.id),
            Cell::new(format!("{:?}", window.day_of_week)),
            Cell::new(&window.start_time),
            Cell::new(&window.end_time),
            Cell::new(if window.is_active { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
}

/// Print a table of course invite links
pub fn print_access_link_table(links: &[AccessLink]) {
    if links.is_empty() {
        info("No invite links for this course");
        return;
    }

    let mut table = new_table(&["Id", "URL", "Used", "Expires"]);
    for link in links {
        let state = if link.is_expired {
            "expired".red().to_string()
        } else if link.is_used {
            "used".yellow().to_string()
        } else {
            "open".green().to_string()
        };
        let expires = link
            .expires_at
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string());

        table.add_row(vec![
            Cell::new(&link.id),
            Cell::new(&link.url),
            Cell::new(state),
            Cell::new(expires),
        ]);
    }

    println!("{table}");
}
