//! Synthetic FITS catalogs served by the mock archive

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

const BLOCK_SIZE: usize = 2880;

fn padded(mut bytes: Vec<u8>, fill: u8) -> Vec<u8> {
    let len = bytes.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
    bytes.resize(len, fill);
    bytes
}

fn header(cards: &[String]) -> Vec<u8> {
    let mut out = Vec::new();
    for card in cards.iter().map(String::as_str).chain(["END"]) {
        out.extend(format!("{:<80}", card).bytes());
    }
    padded(out, b' ')
}

fn card(keyword: &str, value: &str) -> String {
    if value.starts_with('\'') {
        format!("{:<8}= {}", keyword, value)
    } else {
        format!("{:<8}= {:>20}", keyword, value)
    }
}

/// One catalog entry
pub struct Star {
    /// 32-bit integer ID
    pub id: i32,
    /// Object name, at most 16 bytes of UTF-8
    pub name: &'static str,
    /// Effective temperature; NaN marks a missing measurement
    pub teff: f32,
    /// 3-element abundance array
    pub abundances: [f64; 3],
}

/// The stars in [`catalog_fits`]
pub fn stars() -> Vec<Star> {
    vec![
        Star {
            id: 101,
            name: "2M00000002+7417074",
            teff: 4500.5,
            abundances: [0.1, 0.2, 0.3],
        },
        Star {
            id: 102,
            name: "Čeština, star",
            teff: f32::NAN,
            abundances: [0.0; 3],
        },
        Star {
            id: 103,
            name: "",
            teff: 5777.0,
            abundances: [-1.0; 3],
        },
    ]
}

const NAME_WIDTH: usize = 24;

/// Primary HDU plus a BINTABLE with ID (J), APOGEE_ID (24A), TEFF (E) and X_H (3D)
pub fn catalog_fits() -> Vec<u8> {
    let stars = stars();
    let row_len = 4 + NAME_WIDTH + 4 + 3 * 8;

    let mut out = header(&[
        card("SIMPLE", "T"),
        card("BITPIX", "8"),
        card("NAXIS", "0"),
        card("EXTEND", "T"),
    ]);
    out.extend(header(&[
        card("XTENSION", "'BINTABLE'"),
        card("BITPIX", "8"),
        card("NAXIS", "2"),
        card("NAXIS1", &row_len.to_string()),
        card("NAXIS2", &stars.len().to_string()),
        card("PCOUNT", "0"),
        card("GCOUNT", "1"),
        card("TFIELDS", "4"),
        card("TTYPE1", "'ID      '"),
        card("TFORM1", "'J       '"),
        card("TTYPE2", "'APOGEE_ID'"),
        card("TFORM2", &format!("'{}A'", NAME_WIDTH)),
        card("TTYPE3", "'TEFF    '"),
        card("TFORM3", "'E       '"),
        card("TTYPE4", "'X_H     '"),
        card("TFORM4", "'3D      '"),
    ]));

    let mut data = Vec::with_capacity(row_len * stars.len());
    for star in &stars {
        data.extend(star.id.to_be_bytes());
        let name = star.name.as_bytes();
        assert!(name.len() <= NAME_WIDTH);
        data.extend(name);
        data.extend(std::iter::repeat_n(b' ', NAME_WIDTH - name.len()));
        data.extend(star.teff.to_be_bytes());
        for value in star.abundances {
            data.extend(value.to_be_bytes());
        }
    }
    out.extend(padded(data, 0));
    out
}

/// Gzip-compress a payload
pub fn gzip(payload: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).expect("gzip write failed");
    encoder.finish().expect("gzip finish failed")
}
