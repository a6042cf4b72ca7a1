//! Terminal QR codes for mnemonic backups.

use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Blank modules around the code.
const QUIET_ZONE: usize = 2;

/// Left margin, aligned with the labelled output.
const INDENT: &str = "      ";

/// Render `data` as a QR code made of half-block characters.
///
/// Each output line covers two module rows, which keeps the code roughly
/// square in a terminal.
pub fn render(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data)?;
    let width = code.width();
    let colors = code.to_colors();
    let side = width + QUIET_ZONE * 2;

    let dark = |x: usize, y: usize| -> bool {
        let inside = QUIET_ZONE..QUIET_ZONE + width;
        inside.contains(&x)
            && inside.contains(&y)
            && colors[(y - QUIET_ZONE) * width + (x - QUIET_ZONE)] == Color::Dark
    };

    let mut out = String::new();
    for y in (0..side).step_by(2) {
        out.push_str(INDENT);
        for x in 0..side {
            out.push(match (dark(x, y), dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    Ok(out)
}

/// Print `data` as a QR code on stdout.
pub fn render_to_terminal(data: &str) -> Result<(), QrError> {
    let code = render(data)?;
    println!();
    print!("{code}");
    Ok(())
}
