pub const QUIZ_URL: &str = "/quiz";
pub const SUBMIT_QUIZ_URL: &str = "/submit-quiz";
pub const SKIN_TYPES_URL: &str = "/skin-types";
pub const REPORT_URL: &str = "/report";
/// JSON endpoints; exempt from the htmx header requirement.
pub const API_PREFIX: &str = "/api/";

pub const HX_REQUEST_HEADER: &str = "HX-Request";

pub const RESULT_COOKIE_NAME: &str = "quiz_result";

pub fn results_url(token: &str) -> String {
    format!("/results/{token}")
}

pub fn delete_result_url(token: &str) -> String {
    format!("/results/{token}/delete")
}

pub fn skin_type_anchor(code: &str) -> String {
    format!("{SKIN_TYPES_URL}#{code}")
}

/// Form field carrying the answers to one question.
pub fn question_field(question_id: u32) -> String {
    format!("q{question_id}")
}

pub fn parse_question_field(field: &str) -> Option<u32> {
    field.strip_prefix('q')?.parse().ok()
}

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
pub const SET_LOCALE_URL: &str = "/set-locale";
