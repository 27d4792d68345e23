// Timing
pub const REDIRECT_DELAY_MS: u32 = 1500; // success message stays visible this long
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const TOAST_DURATION_MS: u32 = 4000;

// Attachments
pub const ALLOWED_ATTACHMENT_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "pdf", "doc", "docx"];
pub const ATTACHMENT_PROMPT: &str = "Click to upload files or drag and drop";

// localStorage keys
pub const THEME_STORAGE_KEY: &str = "theme";
pub const WELCOME_HINT_STORAGE_KEY: &str = "welcome_hint_seen";

// Reaction counters
pub const TOTAL_COUNTER_KEY: &str = "total";

// Response codes understood by the controller
pub const GUEST_RESTRICTION_CODE: &str = "guest_restriction";

// User-facing copy
pub const SUCCESS_TITLE: &str = "Success";
pub const REJECTED_TITLE: &str = "Submission rejected";
pub const SERVER_ERROR_TITLE: &str = "Server error";
pub const NETWORK_ERROR_TITLE: &str = "Connection problem";
pub const UNEXPECTED_TITLE: &str = "Something went wrong";

pub const FALLBACK_SUCCESS_MESSAGE: &str = "Request completed.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const FALLBACK_SERVER_MESSAGE: &str = "The server could not process the request. Please try again later.";
pub const FALLBACK_NETWORK_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";
pub const OTP_SENT_FALLBACK: &str = "A verification code was sent to your email.";
pub const OTP_VERIFIED_FALLBACK: &str = "Verification successful.";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter your email address.";
pub const CODE_REQUIRED_MESSAGE: &str = "Please enter the verification code.";
pub const BUSY_LABEL_HTML: &str = "<span class=\"spinner\"></span>";
