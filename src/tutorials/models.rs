use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: u32,
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub url: Cow<'static, str>,
}

impl Tutorial {
    pub const fn new_static(
        id: u32,
        title: &'static str,
        description: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            id,
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
            url: Cow::Borrowed(url),
        }
    }
}
