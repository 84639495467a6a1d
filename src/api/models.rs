//! Wire types for the platform's REST API
//!
//! Field names follow the backend's camelCase JSON; enums use its
//! SCREAMING_SNAKE_CASE variants. Everything here is a passthrough shape
//! owned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Can enroll in and take courses
    Student,
    /// Can create and manage courses
    Instructor,
    /// Full access to the back office
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Student => write!(f, "STUDENT"),
            UserRole::Instructor => write!(f, "INSTRUCTOR"),
            UserRole::Admin => write!(f, "ADMIN"),
        }
    }
}

/// Profile fields embedded in the user record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// The authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub profile_data: Profile,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_instructor(&self) -> bool {
        self.role == UserRole::Instructor
    }
}

/// Returned by register and login: the identity plus its bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

// Course catalog

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Video,
    Text,
    Quiz,
    Assignment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub language: String,
    #[serde(default)]
    pub what_you_will_learn: Option<Vec<String>>,
    #[serde(default)]
    pub preview_video_url: Option<String>,
    pub status: CourseStatus,
    pub instructor_id: String,
    #[serde(default)]
    pub instructor: Option<Instructor>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
    #[serde(default)]
    pub total_enrollments: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub user_id: String,
    pub bio: String,
    pub expertise: Vec<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub order_index: i32,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub text_content: Option<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    pub order_index: i32,
    pub is_free: bool,
    #[serde(default)]
    pub quizzes: Option<Vec<Quiz>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub lesson_id: String,
    pub title: String,
    /// Minimum percentage to pass
    pub passing_score: u32,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub course_id: Option<String>,
    pub rating: u32,
    #[serde(default)]
    pub review_text: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
}

// Learning

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub course_id: String,
    pub course_title: String,
    pub enrollment_date: DateTime<Utc>,
    pub completion_status: CompletionStatus,
    /// Completed fraction as a percentage
    pub progress: f64,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    #[serde(default)]
    pub last_accessed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub score: f64,
    pub passed: bool,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub passing_score: u32,
    pub completed_at: DateTime<Utc>,
}

// Payments

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCheckout {
    pub order_id: String,
    /// Where the buyer approves the payment
    pub approval_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCapture {
    pub success: bool,
    pub message: String,
    pub payment: PaymentRecord,
    pub enrollment: Enrollment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub paypal_order_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerification {
    pub id: String,
    pub status: String,
    pub amount: f64,
    pub currency: String,
    pub course_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCheckout {
    pub order_id: String,
    pub url: String,
    pub payment_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub course_id: String,
    pub enrolled_at: DateTime<Utc>,
}

// Certificates

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub certificate_code: String,
    pub issued_at: DateTime<Utc>,
    pub metadata: CertificateMetadata,
    #[serde(default)]
    pub course: Option<Course>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateMetadata {
    pub student_name: String,
    pub course_name: String,
    pub instructor_name: String,
    pub completion_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateVerification {
    pub valid: bool,
    #[serde(default)]
    pub certificate: Option<VerifiedCertificate>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedCertificate {
    pub code: String,
    pub student_name: String,
    pub course_name: String,
    pub category: String,
    pub issued_at: DateTime<Utc>,
}

// Learning paths

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub difficulty: CourseLevel,
    pub order_index: i32,
    pub is_published: bool,
    pub total_courses: u32,
    pub courses: Vec<CourseInPath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInPath {
    #[serde(flatten)]
    pub course: Course,
    pub order_in_path: i32,
}

// Contact inquiries

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InquiryStatus::New => write!(f, "NEW"),
            InquiryStatus::InProgress => write!(f, "IN_PROGRESS"),
            InquiryStatus::Resolved => write!(f, "RESOLVED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    #[serde(default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiryStats {
    pub total: u32,
    pub by_status: InquiryStatusCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryStatusCounts {
    pub new: u32,
    pub in_progress: u32,
    pub resolved: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquirySubmitted {
    pub message: String,
    pub inquiry: InquiryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRef {
    pub id: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

// Marketing products

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_published: bool,
    pub order_index: i32,
    pub features: Vec<ProductFeature>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeature {
    pub id: String,
    pub product_id: String,
    pub subtitle: String,
    pub sub_description: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

// Mentoring

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    CancelledByStudent,
    CancelledByInstructor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorAvailability {
    pub id: String,
    pub instructor_id: String,
    pub day_of_week: DayOfWeek,
    /// "HH:MM", backend-local
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
    #[serde(default)]
    pub instructor: Option<PersonRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentoringSession {
    pub id: String,
    pub instructor_id: String,
    pub student_id: String,
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes
    pub duration: u32,
    pub status: SessionStatus,
    pub topic: String,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub instructor_notes: Option<String>,
    #[serde(default)]
    pub student_notes: Option<String>,
    #[serde(default)]
    pub instructor: Option<PersonRef>,
    #[serde(default)]
    pub student: Option<PersonRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display-only nested reference to a person's name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub user: PersonUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUser {
    pub profile_data: PersonName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonName {
    pub name: String,
}

impl PersonRef {
    pub fn name(&self) -> &str {
        &self.user.profile_data.name
    }
}

// Access links

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLink {
    pub id: String,
    pub token: String,
    pub url: String,
    pub course_id: String,
    #[serde(default)]
    pub course_title: Option<String>,
    pub is_used: bool,
    #[serde(default)]
    pub used_by: Option<String>,
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub is_expired: bool,
    #[serde(default)]
    pub created_by: Option<AccessLinkCreator>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLinkCreator {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLinkInfo {
    pub is_valid: bool,
    pub course: AccessLinkCourse,
    pub max_uses: u32,
    pub used_count: u32,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLinkCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub instructor: PersonName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemResult {
    pub message: String,
    pub enrollment: Enrollment,
}

// Envelopes

/// Mutation acknowledgement; also what a 204/empty body resolves to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseList {
    pub courses: Vec<Course>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeleted {
    pub message: String,
    pub deleted_user_id: String,
    pub deleted_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub enrollment: Option<Enrollment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"STUDENT\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"ADMIN\"").unwrap(),
            UserRole::Admin
        );
        assert_eq!(UserRole::Instructor.to_string(), "INSTRUCTOR");
    }

    #[test]
    fn test_user_deserializes_from_backend_shape() {
        let json = r#"{
            "id": "u1",
            "email": "a@b.com",
            "role": "STUDENT",
            "profileData": {"name": "Ada", "avatar": null},
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.profile_data.name, "Ada");
        assert!(user.updated_at.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_level_wire_format() {
        assert_eq!(
            serde_json::to_string(&CourseLevel::AllLevels).unwrap(),
            "\"ALL_LEVELS\""
        );
        assert_eq!(
            serde_json::from_str::<SessionStatus>("\"CANCELLED_BY_STUDENT\"").unwrap(),
            SessionStatus::CancelledByStudent
        );
    }

    #[test]
    fn test_ack_accepts_empty_object() {
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert!(ack.message.is_none());
    }

    #[test]
    fn test_course_in_path_flattens() {
        let json = r#"{
            "id": "c1",
            "title": "Intro to Robotics",
            "description": "d",
            "price": 49.0,
            "category": "robotics",
            "level": "BEGINNER",
            "language": "en",
            "status": "PUBLISHED",
            "instructorId": "i1",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "orderInPath": 2
        }"#;
        let in_path: CourseInPath = serde_json::from_str(json).unwrap();
        assert_eq!(in_path.course.id, "c1");
        assert_eq!(in_path.order_in_path, 2);
    }
}
