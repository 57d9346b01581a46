use std::env;
use std::ffi::{OsStr, OsString};
use std::process::Command;

const FALLBACK_SHELL: &str = "/bin/sh";

/// Environment handed to every spawned CLI process.
///
/// Computed once at startup and read-only afterwards. MCP clients usually
/// launch servers without a login shell, so tools installed through shell
/// profiles (nvm, homebrew, ...) would be missing from the inherited `PATH`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnv {
    vars: Vec<(OsString, OsString)>,
}

impl ProcessEnv {
    /// Current process environment with `PATH` taken from the login shell.
    pub fn resolve() -> Self {
        let path = resolve_shell_path().or_else(|| env::var_os("PATH"));
        let mut resolved = Self::inherited();
        if let Some(path) = path {
            resolved.set_path(path);
        }
        resolved
    }

    /// Current process environment, untouched.
    pub fn inherited() -> Self {
        Self {
            vars: env::vars_os().collect(),
        }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Replace `PATH`, appending it when absent.
    pub fn set_path(&mut self, path: impl Into<OsString>) {
        let path = path.into();
        match self.vars.iter().position(|(key, _)| key.as_os_str() == "PATH") {
            Some(index) => self.vars[index].1 = path,
            None => self.vars.push((OsString::from("PATH"), path)),
        }
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        self.vars
            .iter()
            .find(|(k, _)| k.as_os_str() == key)
            .map(|(_, v)| v.as_os_str())
    }

    pub fn path(&self) -> Option<&OsStr> {
        self.get("PATH")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Ask the user's login shell for its `PATH`.
///
/// Returns `None` when the shell cannot be run or prints nothing.
pub fn resolve_shell_path() -> Option<OsString> {
    let shell = env::var_os("SHELL")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| OsString::from(FALLBACK_SHELL));
    shell_path_from(&shell)
}

pub fn shell_path_from(shell: &OsStr) -> Option<OsString> {
    let output = match Command::new(shell).args(["-lc", "echo $PATH"]).output() {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(shell = ?shell, error = %err, "login shell unavailable, keeping inherited PATH");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(shell = ?shell, status = ?output.status, "login shell exited unsuccessfully");
        return None;
    }
    let resolved = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if resolved.is_empty() {
        return None;
    }
    Some(OsString::from(resolved))
}
