use std::convert::Infallible;

pub fn log_error_ccstr<E: core::fmt::Display>(error: E) -> CCStr {
    let e = error.to_string();
    log::error!("{e}");
    CCStr::from(e)
}

// pub type CheapClone<T> = std::sync::Arc<T>;
pub type CheapClone<T> = std::rc::Rc<T>;

/// Cheaply clonable immutable string, used for every piece of text the UI
/// passes around so components can clone freely without re-allocating.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl core::str::FromStr for CCStr {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CCStr(CheapClone::from(s)))
    }
}
impl From<String> for CCStr {
    fn from(value: String) -> Self {
        value.parse().unwrap()
    }
}
impl From<&String> for CCStr {
    fn from(value: &String) -> Self {
        value.parse().unwrap()
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        value.parse().unwrap()
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
