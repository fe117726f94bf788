//! Console logging. Native builds (unit tests) have no JS console, so the
//! helpers compile to no-ops there.

#[cfg(target_arch = "wasm32")]
const PREFIX: &str = "Portfolio: ";

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&format!("{PREFIX}{msg}").into());
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("{PREFIX}{msg}").into());
}
