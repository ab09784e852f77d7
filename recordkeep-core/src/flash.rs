//! One-shot status messages carried on a redirect
//!
//! A successful form POST redirects to a listing page with
//! `?flash=<message>&level=<success|danger>`; the listing renders it once.

use axum::response::Redirect;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    fn parse(s: &str) -> Self {
        match s {
            "danger" => Self::Danger,
            _ => Self::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }

    /// Target URL with this message attached.
    pub fn location(&self, path: &str) -> String {
        format!(
            "{}?flash={}&level={}",
            path,
            urlencoding::encode(&self.message),
            self.level.as_str()
        )
    }

    /// 303 redirect to `path` carrying this message.
    pub fn redirect(self, path: &str) -> Redirect {
        Redirect::to(&self.location(path))
    }
}

/// Query parameters a listing page accepts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashParams {
    pub flash: Option<String>,
    pub level: Option<String>,
}

impl FlashParams {
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.flash.filter(|m| !m.is_empty())?;
        let level = self
            .level
            .as_deref()
            .map(FlashLevel::parse)
            .unwrap_or(FlashLevel::Success);
        Some(Flash { level, message })
    }
}
