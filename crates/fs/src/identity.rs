use std::{cell::RefCell, ffi::CStr, ptr};

use hashbrown::HashMap;

/// Scratch buffer size when `sysconf` has no opinion.
const DEFAULT_BUF_LEN: usize = 1024;
/// Give up on an entry whose record does not fit in this many bytes.
const MAX_BUF_LEN: usize = 1 << 20;

/// Maps numeric owner/group ids to display names.
///
/// An id with no matching identity yields an empty string; lookups never fail.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> String;
    fn group_name(&self, gid: u32) -> String;
}

impl<R: IdentityResolver + ?Sized> IdentityResolver for &R {
    fn user_name(&self, uid: u32) -> String {
        (**self).user_name(uid)
    }

    fn group_name(&self, gid: u32) -> String {
        (**self).group_name(gid)
    }
}

/// Host passwd/group database, queried on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> String {
        lookup_user(uid).unwrap_or_default()
    }

    fn group_name(&self, gid: u32) -> String {
        lookup_group(gid).unwrap_or_default()
    }
}

fn initial_buf_len(key: libc::c_int) -> usize {
    let hint = unsafe { libc::sysconf(key) };
    if hint > 0 {
        hint as usize
    } else {
        DEFAULT_BUF_LEN
    }
}

fn lookup_user(uid: u32) -> Option<String> {
    let mut buf: Vec<libc::c_char> = vec![0; initial_buf_len(libc::_SC_GETPW_R_SIZE_MAX)];
    // SAFETY: passwd is plain old data; getpwuid_r fills it on success.
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = ptr::null_mut();

    loop {
        let rc = unsafe {
            libc::getpwuid_r(
                uid as libc::uid_t,
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            return None;
        }

        // SAFETY: pw_name points into `buf`, which is still alive.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

fn lookup_group(gid: u32) -> Option<String> {
    let mut buf: Vec<libc::c_char> = vec![0; initial_buf_len(libc::_SC_GETGR_R_SIZE_MAX)];
    // SAFETY: group is plain old data; getgrgid_r fills it on success.
    let mut grp: libc::group = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::group = ptr::null_mut();

    loop {
        let rc = unsafe {
            libc::getgrgid_r(
                gid as libc::gid_t,
                &mut grp,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || grp.gr_name.is_null() {
            return None;
        }

        // SAFETY: gr_name points into `buf`, which is still alive.
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

/// Memoizes another resolver for the lifetime of one run.
///
/// The layout pass and the render pass ask for the same ids, so each id
/// reaches the host database once.
pub struct CachedIdentity<R> {
    inner: R,
    users: RefCell<HashMap<u32, String>>,
    groups: RefCell<HashMap<u32, String>>,
}

impl<R: IdentityResolver> CachedIdentity<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            users: RefCell::new(HashMap::new()),
            groups: RefCell::new(HashMap::new()),
        }
    }
}

impl<R: IdentityResolver> IdentityResolver for CachedIdentity<R> {
    fn user_name(&self, uid: u32) -> String {
        self.users
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| self.inner.user_name(uid))
            .clone()
    }

    fn group_name(&self, gid: u32) -> String {
        self.groups
            .borrow_mut()
            .entry(gid)
            .or_insert_with(|| self.inner.group_name(gid))
            .clone()
    }
}

/// Fixed id-to-name table.
#[derive(Debug, Default, Clone)]
pub struct StaticIdentity {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl StaticIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: &str) -> Self {
        self.users.insert(uid, name.to_owned());
        self
    }

    pub fn with_group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(gid, name.to_owned());
        self
    }
}

impl IdentityResolver for StaticIdentity {
    fn user_name(&self, uid: u32) -> String {
        self.users.get(&uid).cloned().unwrap_or_default()
    }

    fn group_name(&self, gid: u32) -> String {
        self.groups.get(&gid).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
