//! Permission token constants for Lectern.
//!
//! Permissions are opaque strings granted to roles by the role registry.
//! Using these constants instead of string literals keeps the registry table,
//! the HTTP layer and the tests in agreement.
//!
//! # Example
//!
//! ```ignore
//! use lectern_core::permissions;
//!
//! if registry.has_permission(&identity.role, permissions::VIEW_GRADES) {
//!     // Show the grade book
//! }
//! ```

// =============================================================================
// Administration
// =============================================================================

/// Permission to create, update and deactivate user accounts
pub const MANAGE_USERS: &str = "manage_users";
/// Permission to change role assignments
pub const MANAGE_ROLES: &str = "manage_roles";
/// Permission to change platform-wide configuration
pub const MANAGE_SYSTEM: &str = "manage_system";
/// Permission to change tenant settings
pub const MANAGE_SETTINGS: &str = "manage_settings";
/// Permission to read every record regardless of ownership
pub const VIEW_ALL_DATA: &str = "view_all_data";

// =============================================================================
// Courses and content
// =============================================================================

/// Permission to create and edit courses
pub const MANAGE_COURSES: &str = "manage_courses";
/// Permission to publish course material
pub const MANAGE_CONTENT: &str = "manage_content";
/// Permission to browse enrolled courses
pub const VIEW_COURSES: &str = "view_courses";
/// Permission to read course material without enrolment
pub const VIEW_COURSE_CONTENT: &str = "view_course_content";

// =============================================================================
// Assignments and grading
// =============================================================================

/// Permission to create and schedule assignments
pub const MANAGE_ASSIGNMENTS: &str = "manage_assignments";
/// Permission to hand in assignments
pub const SUBMIT_ASSIGNMENTS: &str = "submit_assignments";
/// Permission to grade submissions
pub const GRADE_STUDENTS: &str = "grade_students";
/// Permission to read one's own grades
pub const VIEW_GRADES: &str = "view_grades";

// =============================================================================
// Analytics and reporting
// =============================================================================

/// Permission to view tenant analytics
pub const VIEW_ANALYTICS: &str = "view_analytics";
/// Permission to view analytics for one's own courses
pub const VIEW_COURSE_ANALYTICS: &str = "view_course_analytics";
/// Permission to view platform-wide analytics
pub const VIEW_SYSTEM_ANALYTICS: &str = "view_system_analytics";
/// Permission to generate audit reports
pub const GENERATE_REPORTS: &str = "generate_reports";

// =============================================================================
// Communication
// =============================================================================

/// Permission to message students
pub const COMMUNICATE_STUDENTS: &str = "communicate_students";
/// Permission to message instructors
pub const COMMUNICATE_INSTRUCTORS: &str = "communicate_instructors";
/// Permission to join peer study groups
pub const JOIN_STUDY_GROUPS: &str = "join_study_groups";
/// Permission to read announcements
pub const VIEW_ANNOUNCEMENTS: &str = "view_announcements";

// =============================================================================
// Guardians
// =============================================================================

/// Permission to follow a linked child's progress
pub const VIEW_CHILD_PROGRESS: &str = "view_child_progress";
/// Permission to read a linked child's grades
pub const VIEW_CHILD_GRADES: &str = "view_child_grades";
