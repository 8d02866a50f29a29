//! Fixed-buffer text shaping for engine-facing labels.

use core::str;

/// Bytes needed for the widest progress label (`"65535 / 65535"`).
pub const PROGRESS_LABEL_BYTES: usize = 13;

/// Format the progress indicator text, `"<page> / <total>"`.
///
/// Writes into `out` and returns the formatted slice; a buffer smaller
/// than the label truncates rather than fails.
pub fn progress_label<'a>(page: u16, total: u16, out: &'a mut [u8]) -> &'a str {
    let mut len = write_decimal(page, out, 0);
    for byte in b" / " {
        if len >= out.len() {
            break;
        }
        out[len] = *byte;
        len += 1;
    }
    len = write_decimal(total, out, len);

    str::from_utf8(&out[..len]).unwrap_or("")
}

/// Append the decimal digits of `value` at `len`; returns the new
/// length. Digits that do not fit are dropped.
pub(crate) fn write_decimal(mut value: u16, out: &mut [u8], mut len: usize) -> usize {
    let mut digits = [0u8; 5];
    let mut count = 0usize;
    loop {
        digits[count] = b'0' + (value % 10) as u8;
        count += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    while count > 0 && len < out.len() {
        count -= 1;
        out[len] = digits[count];
        len += 1;
    }
    len
}
