use colored::*;

use crate::terminal::print;

const BANNER_0: &str = r#"
        ██████╗ ███████╗ ██████╗ ██████╗ ███╗   ██╗██████╗
        ██╔══██╗██╔════╝██╔════╝██╔═══██╗████╗  ██║██╔══██╗
        ██████╔╝█████╗  ██║     ██║   ██║██╔██╗ ██║██████╔╝
        ██╔══██╗██╔══╝  ██║     ██║   ██║██║╚██╗██║██╔══██╗
        ██║  ██║███████╗╚██████╗╚██████╔╝██║ ╚████║██║  ██║
        ╚═╝  ╚═╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝╚═╝  ╚═╝
"#;

const BANNER_1: &str = r#"
           ___       ___       ___       ___       ___       ___
          /\  \     /\  \     /\  \     /\  \     /\__\     /\  \
         /::\  \   /::\  \   /::\  \   /::\  \   /:| _|_   /::\  \
        /::\:\__\ /::\:\__\ /:/\:\__\ /:/\:\__\ /::|/\__\ /::\:\__\
        \;:::/  / \:\:\/  / \:\ \/__/ \:\/:/  / \/|::/  / \;:::/  /
         |:\/__/   \:\/  /   \:\__\    \::/  /    |:/  /   |:\/__/
          \|__|     \/__/     \/__/     \/__/     \/__/     \|__|
"#;

pub fn print() {
    match rand::random_range(0..=1u8) {
        0 => print::print(&format!("{}", BANNER_0.green())),
        _ => print::print(&format!("{}", BANNER_1.truecolor(80, 160, 220))),
    }
}
