//! CLI interface for Robolearn

pub mod commands;
mod output;

pub use output::*;

use crate::api::models::{CompletionStatus, CourseLevel, CourseStatus, DayOfWeek, InquiryStatus};
use crate::api::payments::PlanType;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "robolearn")]
#[command(version)]
#[command(about = "Client for the Epic Robotics learning platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new robolearn.toml configuration file
    Init,

    /// Log in with email and password
    Login {
        #[arg(short, long)]
        email: String,

        /// Password; prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password; prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out and discard the stored token
    Logout,

    /// Show the current identity
    Whoami {
        /// Re-fetch the profile from the server first
        #[arg(long)]
        refresh: bool,
    },

    /// Manage your profile and account
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Browse and manage the course catalog
    Courses {
        #[command(subcommand)]
        action: CoursesAction,
    },

    /// Track progress and take quizzes in enrolled courses
    Learn {
        #[command(subcommand)]
        action: LearnAction,
    },

    /// Curated learning paths
    Paths {
        #[command(subcommand)]
        action: PathsAction,
    },

    /// Marketing product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },

    /// Certificates for completed courses
    Certs {
        #[command(subcommand)]
        action: CertsAction,
    },

    /// Mentoring availability and session booking
    Mentoring {
        #[command(subcommand)]
        action: MentoringAction,
    },

    /// Contact inquiries
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Course invite links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Payments and subscriptions
    Pay {
        #[command(subcommand)]
        action: PayAction,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the full profile
    Show,

    /// Update profile fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        avatar: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Change the account password (prompts for both)
    Password,

    /// Delete the account permanently
    Delete {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CoursesAction {
    /// List the catalog
    List {
        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_enum)]
        level: Option<CourseLevel>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        instructor: Option<String>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one course
    Show { id: String },

    /// Show the section/lesson tree
    Lessons { id: String },

    /// Create a course (instructor)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        category: String,

        #[arg(long, value_enum, default_value = "beginner")]
        level: CourseLevel,

        #[arg(long, default_value = "en")]
        language: String,

        #[arg(long)]
        thumbnail: Option<String>,
    },

    /// Update a course (instructor)
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long, value_enum)]
        status: Option<CourseStatus>,
    },

    /// Delete a course (instructor)
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Enroll in a course
    Enroll { id: String },

    /// List reviews of a course
    Reviews { id: String },

    /// Add or replace your review
    Review {
        id: String,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: u32,

        #[arg(long)]
        text: Option<String>,
    },

    /// List courses you are enrolled in
    Enrolled {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List invite links for a course (instructor)
    Links { id: String },

    /// Issue an invite link for a course (instructor)
    Link {
        id: String,

        #[arg(long)]
        max_uses: Option<u32>,

        /// RFC 3339 expiry, e.g. 2026-12-31T00:00:00Z
        #[arg(long)]
        expires_at: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum LearnAction {
    /// Progress across all enrolled courses
    Progress {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show an enrolled course with progress
    Show { course_id: String },

    /// Record lesson completion
    Complete {
        lesson_id: String,

        #[arg(long, value_enum, default_value = "completed")]
        status: CompletionStatus,

        /// Seconds spent since the last update
        #[arg(long)]
        time_spent: Option<u32>,
    },

    /// Submit quiz answers as INDEX=CHOICE pairs, e.g. 0=2 1=0
    Quiz {
        quiz_id: String,

        #[arg(required = true)]
        answers: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum PathsAction {
    /// List learning paths
    List {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one path with its courses
    Show { id: String },

    /// Create a path (admin)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, value_enum)]
        difficulty: Option<CourseLevel>,
    },

    /// Publish or unpublish a path (admin)
    Publish {
        id: String,

        #[arg(long, action = clap::ArgAction::Set, default_value = "true")]
        published: bool,
    },

    /// Delete a path (admin)
    Delete {
        id: String,

        #[arg(short, long)]
        force: bool,
    },

    /// Add a course to a path (admin)
    AddCourse {
        id: String,
        course_id: String,

        #[arg(long)]
        order: Option<i32>,
    },

    /// Remove a course from a path (admin)
    RemoveCourse { id: String, course_id: String },
}

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List products
    List {
        /// Include unpublished drafts (admin)
        #[arg(long)]
        all: bool,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one product with its features
    Show { id: String },

    /// Create a product (admin)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// Publish or unpublish a product (admin)
    Publish {
        id: String,

        #[arg(long, action = clap::ArgAction::Set, default_value = "true")]
        published: bool,
    },

    /// Delete a product (admin)
    Delete {
        id: String,

        #[arg(short, long)]
        force: bool,
    },

    /// Add a feature block to a product (admin)
    AddFeature {
        id: String,

        #[arg(long)]
        subtitle: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "0")]
        order: i32,
    },

    /// Delete a feature block (admin)
    DeleteFeature { feature_id: String },
}

#[derive(Subcommand)]
pub enum CertsAction {
    /// List your certificates
    List {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Issue a certificate for a completed course
    Issue { course_id: String },

    /// Show one certificate
    Show { id: String },

    /// Show the certificate for a course
    ByCourse { course_id: String },

    /// Verify a certificate code (public)
    Verify { code: String },

    /// Print a direct download or preview URL
    Url {
        id: String,

        /// Preview URL instead of download
        #[arg(long)]
        preview: bool,
    },
}

#[derive(Subcommand)]
pub enum MentoringAction {
    /// List instructors offering mentoring
    Instructors,

    /// Show weekly availability; yours when no instructor is given
    Availability {
        instructor: Option<String>,
    },

    /// Add an availability window (instructor)
    SetAvailability {
        #[arg(long, value_enum)]
        day: DayOfWeek,

        /// "HH:MM"
        #[arg(long)]
        start: String,

        /// "HH:MM"
        #[arg(long)]
        end: String,
    },

    /// Remove an availability window (instructor)
    DropAvailability { id: String },

    /// List your mentoring sessions
    Sessions,

    /// Book a session with an instructor
    Book {
        #[arg(long)]
        instructor: String,

        /// RFC 3339 start time
        #[arg(long)]
        at: String,

        /// Duration in minutes
        #[arg(long, default_value = "60")]
        duration: u32,

        #[arg(long)]
        topic: String,
    },

    /// Cancel a session
    Cancel { id: String },
}

#[derive(Subcommand)]
pub enum ContactAction {
    /// Submit an inquiry (works unauthenticated)
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// List inquiries (admin)
    List {
        #[arg(long, value_enum)]
        status: Option<InquiryStatus>,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Inquiry counts by status (admin)
    Stats,

    /// Show one inquiry (admin)
    Show { id: String },

    /// Update an inquiry's status (admin)
    SetStatus {
        id: String,

        #[arg(value_enum)]
        status: InquiryStatus,
    },

    /// Delete an inquiry (admin)
    Delete {
        id: String,

        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum LinksAction {
    /// Show what an invite link grants (public)
    Info { token: String },

    /// Redeem an invite link and enroll
    Redeem { token: String },

    /// Revoke an invite link (instructor)
    Revoke { id: String },
}

#[derive(Subcommand)]
pub enum PayAction {
    /// Open a checkout session for a course
    Checkout { course_id: String },

    /// Capture an approved order
    Capture { order_id: String },

    /// Check a payment's status
    Verify { payment_id: String },

    /// List your subscriptions
    Subscriptions,

    /// Start a subscription checkout
    Subscribe {
        #[arg(value_enum)]
        plan: PlanType,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
