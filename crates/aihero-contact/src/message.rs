//! Contact request record and its notification text.

/// Placeholder for an empty school or email.
pub const MISSING_FIELD: &str = "Kiritilmagan";
/// Placeholder for an empty free-text message.
pub const MISSING_MESSAGE: &str = "Xabar yo'q";

/// Fields entered in the contact form.
///
/// Name, school and phone are required by the form; email and message may be
/// left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub school: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Names of required fields that are blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("school", &self.school),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Render the request as a Telegram message in HTML parse mode.
pub fn format_message(request: &ContactRequest) -> String {
    format!(
        "🚀 <b>Yangi Ariza (AI HERO):</b>\n\
         \n\
         👤 <b>Ism:</b> {name}\n\
         🏫 <b>Maktab:</b> {school}\n\
         📞 <b>Tel:</b> {phone}\n\
         📧 <b>Email:</b> {email}\n\
         \n\
         💬 <b>Xabar:</b>\n\
         {message}",
        name = escape_html(&request.name),
        school = escape_html(or_placeholder(&request.school, MISSING_FIELD)),
        phone = escape_html(&request.phone),
        email = escape_html(or_placeholder(&request.email, MISSING_FIELD)),
        message = escape_html(or_placeholder(&request.message, MISSING_MESSAGE)),
    )
}

/// Only an empty value counts as missing; whitespace is sent as typed.
fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Escape the characters Telegram's HTML parser treats as markup.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
