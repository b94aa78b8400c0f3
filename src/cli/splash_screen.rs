//! The module contains function for displaying CLI splash screen.
//!
//! - Title
//! - Short Description
//! - Version Information

use colored::*;

use crate::cli::colors::QB_BLUE;

pub fn splash_screen() {
    show_splash_screen();
    show_version_info();
}

fn show_splash_screen() {
    print!(
        r#"
    {}
        "#,
        r"
     ██████╗ ██╗   ██╗██╗ ██████╗██╗  ██╗██████╗  █████╗ ███████╗███████╗
    ██╔═══██╗██║   ██║██║██╔════╝██║ ██╔╝██╔══██╗██╔══██╗██╔════╝██╔════╝
    ██║   ██║██║   ██║██║██║     █████╔╝ ██████╔╝███████║███████╗█████╗
    ██║▄▄ ██║██║   ██║██║██║     ██╔═██╗ ██╔══██╗██╔══██║╚════██║██╔══╝
    ╚██████╔╝╚██████╔╝██║╚██████╗██║  ██╗██████╔╝██║  ██║███████║███████╗
     ╚══▀▀═╝  ╚═════╝ ╚═╝ ╚═════╝╚═╝  ╚═╝╚═════╝ ╚═╝  ╚═╝╚══════╝╚══════╝
        "
        .color(QB_BLUE)
    )
}

fn show_version_info() {
    println!(
        r"
    {}

    Version {}
        ",
        env!("CARGO_PKG_DESCRIPTION").color(QB_BLUE),
        env!("CARGO_PKG_VERSION").color(QB_BLUE).italic(),
    )
}
