//! Recognized navigation calls, mapped to the argument position carrying
//! the destination identifier. Built once at process start and passed into
//! discoverers by reference.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Router-family calls; the bound argument is a destination page *path*.
pub static ROUTER_CALLS: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| HashMap::from([("pushUrl", 0), ("replaceUrl", 0)]));

/// Navigation-stack calls; the bound argument is a destination page *alias*.
pub static NAV_CALLS: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| HashMap::from([("pushPathByName", 0), ("pushPath", 0)]));
