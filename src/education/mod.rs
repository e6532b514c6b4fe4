// src/education/mod.rs
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TipSheet {
    pub title: &'static str,
    pub guidelines: &'static [&'static str],
}

pub const PASSWORD_TIPS: TipSheet = TipSheet {
    title: "Strong Password Guidelines",
    guidelines: &[
        "Use at least 8 characters",
        "Mix uppercase and lowercase letters",
        "Include numbers and special characters",
        "Avoid common words or patterns",
        "Don't reuse passwords across sites",
    ],
};

impl TipSheet {
    pub fn render(&self) -> String {
        let mut out = format!("{}:\n", self.title);
        for tip in self.guidelines {
            out.push_str("  • ");
            out.push_str(tip);
            out.push('\n');
        }
        out
    }
}
