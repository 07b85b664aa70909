mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use storage::config::{self, StartupConfig};
use theme::Theme;

/// 根据命令行参数和配置文件确定本次使用的主题
fn resolve_theme(cli_theme: Option<&str>, config_theme: &str) -> Theme {
    if let Some(name) = cli_theme {
        match Theme::parse(name) {
            Some(theme) => return theme,
            None => eprintln!("Unknown theme '{}', falling back to config", name),
        }
    }
    Theme::from_name(config_theme)
}

/// 启动 TUI 界面
fn run_tui(app: &mut App) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => config::config_path().ok(),
    };
    let StartupConfig {
        config,
        save_path,
        error: config_error,
    } = config::load_startup_config(config_path);

    let theme = resolve_theme(cli.theme.as_deref(), &config.theme.name);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Themes => {
            if let Some(ref e) = config_error {
                eprintln!("Warning: {}, using defaults", e);
            }
            cli::themes::execute(theme);
        }
        Commands::Tui => {
            let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
            // 日志失败不影响使用
            match logging::log_path() {
                Ok(path) => {
                    if let Err(e) = logging::init_file_logging(&path, level) {
                        eprintln!("Logging disabled: {}", e);
                    }
                }
                Err(e) => eprintln!("Logging disabled: {}", e),
            }
            tracing::info!(theme = theme.label(), "starting todo");

            let mut app = App::new(config, save_path, theme);
            if let Some(ref e) = config_error {
                // 损坏的配置文件保持原样，本次不写回
                tracing::warn!(error = %e, "invalid config, using defaults");
                app.show_warning("Config unreadable, settings will not be saved");
            }
            run_tui(&mut app)?;

            tracing::info!(tasks = app.store.len(), "exiting, tasks discarded");
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::screen::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme() {
        assert_eq!(resolve_theme(Some("nord"), "Dracula"), Theme::Nord);
        assert_eq!(resolve_theme(Some("bogus"), "Dracula"), Theme::Dracula);
        assert_eq!(resolve_theme(None, "Gruvbox"), Theme::Gruvbox);
        assert_eq!(resolve_theme(None, "???"), Theme::Auto);
    }
}
