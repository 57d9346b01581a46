/// Builds a CLI argument vector following the zaia flag conventions:
/// empty strings and non-positive numbers leave their flag out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv {
    args: Vec<String>,
}

impl Argv {
    pub fn new(head: &str) -> Self {
        Self {
            args: vec![head.to_string()],
        }
    }

    /// Positional argument, always kept.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// `flag value`, always kept.
    pub fn flag(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    /// `flag value` when the value is present and non-empty.
    pub fn opt(self, flag: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.flag(flag, value),
            _ => self,
        }
    }

    /// Integer flag, only when positive.
    pub fn count(self, flag: &str, value: Option<i64>) -> Self {
        match value {
            Some(value) if value > 0 => self.flag(flag, value.to_string()),
            _ => self,
        }
    }

    /// Fractional flag, only when positive. See [`format_amount`].
    pub fn amount(self, flag: &str, value: Option<f64>) -> Self {
        match value {
            Some(value) if value > 0.0 => self.flag(flag, format_amount(value)),
            _ => self,
        }
    }

    /// Bare flag when `on`.
    pub fn switch(self, flag: &str, on: bool) -> Self {
        if on {
            self.arg(flag)
        } else {
            self
        }
    }

    pub fn build(self) -> Vec<String> {
        self.args
    }
}

/// Shortest decimal form, switching to `1.5e+06` notation when the exponent
/// is below -4 or at least 6. This is the form the CLIs print and parse.
pub fn format_amount(value: f64) -> String {
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return value.to_string(),
    };
    if (-4..6).contains(&exponent) {
        return value.to_string();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}
