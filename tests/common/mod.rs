#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const INFO_FIXTURE: &str = include_str!("../fixtures/subtheme/subtheme.info.yml");
pub const THEME_FIXTURE: &str = include_str!("../fixtures/subtheme/subtheme.theme");
pub const SASS_FIXTURE: &str = include_str!("../fixtures/assets/main.scss");

fn write(path: PathBuf, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lays out a Deck starter kit under `<root>/themes/contrib/deck/subtheme`.
pub fn create_starter_kit(root: &Path) -> PathBuf {
    let kit = root.join("themes/contrib/deck/subtheme");

    write(kit.join(".gitignore"), "node_modules");
    write(kit.join(".eslintrc"), "");
    write(kit.join("package.json"), "{}");
    write(kit.join("hooks/preprocess/page.inc"), "<?php");
    write(kit.join("SUBTHEME.info.yml.tpl"), INFO_FIXTURE);
    write(kit.join("SUBTHEME.libraries.yml.tpl"), "");
    write(kit.join("SUBTHEME.theme"), THEME_FIXTURE);
    write(kit.join("assets/src/js/.gitkeep"), "");
    write(kit.join("assets/src/sass/main.scss"), SASS_FIXTURE);
    write(kit.join("assets/src/fonts/.gitkeep"), "");

    kit
}

/// Path of the theme generated for `machine_name`.
pub fn theme_dir(root: &Path, machine_name: &str) -> PathBuf {
    root.join("themes/custom").join(machine_name)
}

/// Counts every file and directory under `dir`, zero if it does not exist.
pub fn count_entries(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    walkdir::WalkDir::new(dir).min_depth(1).into_iter().count()
}
