pub mod timer;
pub mod webview;
