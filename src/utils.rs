//! 通用辅助函数：环境变量读取与解析

use std::{env, path::PathBuf, str::FromStr};

/// 可选读取 PATH 环境变量为 PathBuf。
pub(crate) fn env_opt_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// 可选读取 String 环境变量（去除首尾空白，空串视为未设置）。
pub(crate) fn env_opt_string(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| non_empty_trimmed(&s))
}

/// 可选读取并解析环境变量，解析失败视为未设置。
pub(crate) fn env_opt_parse<T: FromStr>(key: &str) -> Option<T> {
    env_opt_string(key).and_then(|s| s.parse::<T>().ok())
}

pub(crate) fn non_empty_trimmed(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}
