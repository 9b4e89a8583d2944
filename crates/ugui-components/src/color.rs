//! Deterministic colours from text

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

const GOLDEN_RATIO: f64 = 0.618_033_988_749_895;
const GOLDEN_RATIO_ALT: f64 = 0.517_638_090_205_041;

/// 32-bit FNV-1a hash of the UTF-8 bytes of `text`
pub fn fnv1a(text: &str) -> u32 {
    text.bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME))
}

/// A bright, readable HSL colour derived from `text`.
///
/// Saturation stays within 65-89% and lightness within 35-54%, so the
/// colour works as a label background with white text.
pub fn colorhash(text: &str) -> String {
    let hash = fnv1a(text);
    let len = text.chars().count() as u32;

    let start_hue = (0.314_159_265 + f64::from(len) * 0.1) % 1.0;
    let hue = ((start_hue + f64::from(hash) * GOLDEN_RATIO * GOLDEN_RATIO_ALT) % 1.0) * 360.0;
    let saturation = 65 + hash.wrapping_add(len) % 25;
    let lightness = 35 + (hash ^ len) % 20;

    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_values() {
        assert_eq!(fnv1a(""), 0x811c_9dc5);
        assert_eq!(fnv1a("a"), 0xe40c_292c);
        assert_eq!(fnv1a("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_colorhash_is_stable() {
        assert_eq!(colorhash("rust"), colorhash("rust"));
        assert_ne!(colorhash("rust"), colorhash("python"));
    }

    #[test]
    fn test_colorhash_ranges() {
        for word in ["", "a", "tag", "µGUI", "a much longer label with spaces"] {
            let color = colorhash(word);
            let inner = color
                .strip_prefix("hsl(")
                .and_then(|s| s.strip_suffix(')'))
                .unwrap();
            let parts: Vec<&str> = inner.split(", ").collect();
            assert_eq!(parts.len(), 3);

            let hue: f64 = parts[0].parse().unwrap();
            let sat: u32 = parts[1].trim_end_matches('%').parse().unwrap();
            let light: u32 = parts[2].trim_end_matches('%').parse().unwrap();
            assert!((0.0..360.0).contains(&hue));
            assert!((65..90).contains(&sat));
            assert!((35..55).contains(&light));
        }
    }
}
