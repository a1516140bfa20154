//! macOS 系统主题检测

use std::process::Command;

/// 检测系统是否为深色模式
///
/// macOS 通过 `defaults` 读取 AppleInterfaceStyle：存在且为 "Dark"
/// 即深色模式；命令失败（包括非 macOS 系统）按浅色模式处理。
pub fn detect_system_theme() -> bool {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_system_theme() {
        // 只是确保函数不会 panic
        let _is_dark = detect_system_theme();
    }
}
