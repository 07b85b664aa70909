//! 系统深色/浅色模式检测

use std::process::Command;

/// 检测系统主题
///
/// 返回 `true` 表示深色模式。macOS 读取 AppleInterfaceStyle，
/// 其他平台根据终端导出的 `COLORFGBG` 判断，都拿不到时按深色处理。
pub fn detect_system_theme() -> bool {
    if cfg!(target_os = "macos") {
        return Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false);
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| is_dark_colorfgbg(&v))
        .unwrap_or(true)
}

/// 解析 "fg;bg" 格式，背景色 0-6 或 8 视为深色
fn is_dark_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 7 || bg == 8)
}
