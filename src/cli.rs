use anyhow::Result;
use std::env;

/// 处理 CLI 命令
/// 返回 true 表示应该继续进入 TUI，false 表示已处理完毕应该退出
pub fn handle_cli() -> Result<bool> {
    let args: Vec<String> = env::args().collect();

    // 如果没有参数，进入 TUI 模式
    if args.len() < 2 {
        return Ok(true);
    }

    match args[1].as_str() {
        "config" => {
            crate::config::show_config()?;
            Ok(false)
        }
        "--help" | "-h" => {
            print_help();
            Ok(false)
        }
        "--version" | "-V" | "-v" => {
            println!("ttx {}", env!("CARGO_PKG_VERSION"));
            Ok(false)
        }
        _ => {
            eprintln!("未知命令: {}", args[1]);
            eprintln!("使用 'ttx --help' 查看帮助");
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("TaskTrax - 终端任务与活动管理");
    println!();
    println!("用法:");
    println!("  ttx              启动 TUI");
    println!("  ttx config       查看当前配置");
    println!("  ttx --help       显示帮助");
    println!("  ttx --version    显示版本");
    println!();
    println!("TUI 内按 ? 查看键盘快捷键。");
}
