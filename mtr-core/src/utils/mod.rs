//! 工具模块
//!
//! 提供帧输出与半字节打包常用的工具函数

/// 电话号码填充半字节
pub const FILLER_NIBBLE: u8 = 0x0F;

/// 将字节数组转换为十六进制字符串（以空格分隔）
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 将十六进制字符串转换为字节数组，忽略空白
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let clean_str: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(clean_str)
}

/// 将半字节序列按高位在前两两打包，奇数个时末尾补填充半字节
pub fn pack_nibbles(nibbles: &[u8]) -> Vec<u8> {
    nibbles
        .chunks(2)
        .map(|pair| {
            let high = pair[0] & 0x0F;
            let low = pair.get(1).copied().unwrap_or(FILLER_NIBBLE) & 0x0F;
            (high << 4) | low
        })
        .collect()
}
