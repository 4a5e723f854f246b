//! Host platform detection and the native commands each platform family uses.

use std::path::{Path, PathBuf};
use std::process::Command;

/// The platform families the shell knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other Unix-like host.
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "Darwin",
            Platform::Linux => "Linux",
        }
    }

    /// Verb of the native directory listing command.
    pub fn list_command(&self) -> &'static str {
        match self {
            Platform::Windows => "dir",
            Platform::MacOs | Platform::Linux => "ls",
        }
    }

    /// Builds a command that hands `line` to the native interpreter untouched.
    pub fn interpreter(&self, line: &str) -> Command {
        match self {
            Platform::Windows => windows_interpreter(line),
            Platform::MacOs | Platform::Linux => {
                let mut command = Command::new("sh");
                command.arg("-c").arg(line);
                command
            }
        }
    }

    pub fn clear_command(&self) -> Command {
        match self {
            Platform::Windows => windows_interpreter("cls"),
            Platform::MacOs | Platform::Linux => Command::new("clear"),
        }
    }

    /// Renders the prompt for this platform. `cwd` contributes only its last segment.
    pub fn prompt(&self, identity: &Identity, cwd: &Path) -> String {
        let dir = dir_label(cwd);
        match self {
            Platform::Windows => format!("PS {}> ", dir),
            Platform::MacOs => format!("{}@{} {} % ", identity.user, identity.host, dir),
            Platform::Linux => format!("{}@{}:{}$ ", identity.user, identity.host, dir),
        }
    }
}

#[cfg(windows)]
fn windows_interpreter(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe does its own parsing, so the line must not be re-quoted
    let mut command = Command::new("cmd");
    command.arg("/C").raw_arg(line);
    command
}

#[cfg(not(windows))]
fn windows_interpreter(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

/// Final path segment, or the whole path when there is none (filesystem root).
pub fn dir_label(cwd: &Path) -> String {
    cwd.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cwd.to_string_lossy().into_owned())
}

/// Who and where the shell is running, for the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Identity {
    pub fn detect() -> Self {
        Self {
            user: username().unwrap_or_else(|| "user".to_string()),
            host: hostname().unwrap_or_else(|| "localhost".to_string()),
        }
    }
}

#[cfg(unix)]
fn username() -> Option<String> {
    if let Ok(user) = std::env::var("USER") {
        if !user.is_empty() {
            return Some(user);
        }
    }

    // SAFETY: getpwuid returns either null or a pointer to a static passwd record
    // that stays valid until the next getpw* call on this thread.
    unsafe {
        let passwd = libc::getpwuid(libc::geteuid());
        if passwd.is_null() || (*passwd).pw_name.is_null() {
            return None;
        }
        Some(
            std::ffi::CStr::from_ptr((*passwd).pw_name)
                .to_string_lossy()
                .into_owned(),
        )
    }
}

#[cfg(not(unix))]
fn username() -> Option<String> {
    std::env::var("USERNAME").ok()
}

#[cfg(unix)]
fn hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer is valid for writes of buf.len() bytes.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..end]).into_owned())
}

#[cfg(not(unix))]
fn hostname() -> Option<String> {
    std::env::var("COMPUTERNAME").ok()
}

/// Home directory of the named account, for `~name` paths.
#[cfg(unix)]
pub fn user_home(name: &str) -> Option<PathBuf> {
    let name = std::ffi::CString::new(name).ok()?;

    // SAFETY: getpwnam gets a NUL-terminated name and returns either null or a
    // pointer to a static passwd record, copied out before any other getpw* call.
    unsafe {
        let passwd = libc::getpwnam(name.as_ptr());
        if passwd.is_null() || (*passwd).pw_dir.is_null() {
            return None;
        }
        Some(PathBuf::from(
            std::ffi::CStr::from_ptr((*passwd).pw_dir)
                .to_string_lossy()
                .into_owned(),
        ))
    }
}

/// Windows has no account database lookup here; profiles sit side by side.
#[cfg(not(unix))]
pub fn user_home(name: &str) -> Option<PathBuf> {
    let profiles = dirs::home_dir()?.parent()?.to_path_buf();
    Some(profiles.join(name))
}

/// Kernel or OS release string shown in the banner.
#[cfg(unix)]
pub fn os_release() -> Option<String> {
    // SAFETY: utsname is plain old data, and uname fills it with NUL-terminated fields.
    unsafe {
        let mut uts: libc::utsname = std::mem::zeroed();
        if libc::uname(&mut uts) != 0 {
            return None;
        }
        Some(
            std::ffi::CStr::from_ptr(uts.release.as_ptr())
                .to_string_lossy()
                .into_owned(),
        )
    }
}

#[cfg(not(unix))]
pub fn os_release() -> Option<String> {
    None
}
