//! 记录 id 生成
//!
//! 格式：`prefix + base36(毫秒时间戳) + "-" + 6 位随机 base36`。
//! 只保证进程内实际不冲突，不做全局唯一保证。

use chrono::{DateTime, Utc};
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

pub const EVENT_PREFIX: &str = "ev-";
pub const ATTENDANCE_PREFIX: &str = "att-";
pub const DEVICE_PREFIX: &str = "dev-";

pub fn generate_id(prefix: &str, now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    format!("{prefix}{}-{suffix}", to_base36(millis))
}

pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
