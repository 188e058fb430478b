use std::io::{self, Write};

/// Values per output line.
pub const WRAP_COLUMNS: usize = 32;

/// Write `rgb565` as `0x..., ` literals, breaking the line after every
/// [`WRAP_COLUMNS`] values.
///
/// A partial last line is left without a newline.
pub fn write_hex_dump<W, I>(out: &mut W, rgb565: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = u16>,
{
    let mut counter = 0;
    for pixel in rgb565 {
        write!(out, "{pixel:#x}, ")?;
        counter += 1;
        if counter == WRAP_COLUMNS {
            out.write_all(b"\n")?;
            counter = 0;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_dump_string(rgb565: &[u16]) -> String {
        let mut buf = Vec::new();
        write_hex_dump(&mut buf, rgb565.iter().copied()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        assert_eq!(hex_dump_string(&[]), "");
    }

    #[test]
    fn hex_is_lowercase_and_unpadded() {
        assert_eq!(hex_dump_string(&[0xF800, 0x0, 0x1F, 0xFFFF]), "0xf800, 0x0, 0x1f, 0xffff, ");
    }

    #[test]
    fn thirty_two_values_make_one_line() {
        let text = hex_dump_string(&[0xF800; 32]);
        assert!(text.ends_with(", \n"));
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.matches("0xf800, ").count(), 32);
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn thirty_three_values_leave_open_last_line() {
        let text = hex_dump_string(&[0x1; 33]);
        let (first, rest) = text.split_once('\n').unwrap();
        assert_eq!(first.matches("0x1, ").count(), 32);
        assert_eq!(rest, "0x1, ");
    }

    #[test]
    fn newline_count_is_floor_of_len_over_wrap() {
        for n in [0usize, 1, 31, 32, 63, 64, 65, 100, 320] {
            let text = hex_dump_string(&vec![0xABCD; n]);
            assert_eq!(text.matches('\n').count(), n / WRAP_COLUMNS, "n = {n}");
        }
    }

    #[test]
    fn writes_to_any_sink() {
        let mut out = Vec::new();
        write_hex_dump(&mut out, [0x7E0u16, 0x1F]).unwrap();
        assert_eq!(out, b"0x7e0, 0x1f, ");
    }
}
