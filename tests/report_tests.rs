mod common;
use common::{activity, attendance};
use rinternlog::config::ReportConfig;
use rinternlog::models::RecordKind;
use rinternlog::report::canvas::{CM, PageGeometry};
use rinternlog::report::logo::{Logo, LogoPixels};
use rinternlog::report::pdf::encode_win_ansi;
use rinternlog::report::{
    attendance as attendance_layout, derive_period, diary as diary_layout, period_label,
    render_activity_report, render_attendance_report, report_file_name,
};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};
use tempfile::TempDir;

fn a4() -> PageGeometry {
    PageGeometry::a4()
}

fn attendance_rows(name: &str, n: usize) -> Vec<rinternlog::models::AttendanceRecord> {
    (0..n)
        .map(|i| attendance(name, &format!("2025-08-{:02}", i % 28 + 1), 6.0))
        .collect()
}

// ---------------------------------------------------------------------------
// Period label
// ---------------------------------------------------------------------------

#[test]
fn test_period_spans_min_and_max_dates() {
    assert_eq!(
        derive_period(["2025-09-15", "2025-08-13", "2025-08-20"]),
        "13/08/2025 a 15/09/2025"
    );
}

#[test]
fn test_period_is_empty_without_parsable_dates() {
    assert_eq!(derive_period(Vec::<String>::new()), "");
    assert_eq!(derive_period(["2025-08-13", "someday"]), "");
}

#[test]
fn test_explicit_period_is_used_verbatim() {
    let rows = attendance_rows("Ana", 3);
    assert_eq!(
        period_label(Some("13/08/25 a 15/09/25"), &rows),
        "13/08/25 a 15/09/25"
    );
    assert_eq!(period_label(Some("   "), &rows), "01/08/2025 a 03/08/2025");
    assert_eq!(period_label(None, &[]), "");
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn test_page_capacities_follow_geometry() {
    let att = attendance_layout::capacity(&a4(), false);
    assert_eq!((att.first, att.continuation), (28, 42));

    let dia = diary_layout::capacity(&a4(), false);
    assert_eq!((dia.first, dia.continuation), (32, 36));

    let att_rep = attendance_layout::capacity(&a4(), true);
    assert_eq!(att_rep.continuation, 41);
}

#[test]
fn test_attendance_page_count_matches_capacity() {
    let cfg = ReportConfig::default();
    let cap = attendance_layout::capacity(&a4(), false);

    for n in [0, 1, cap.first, cap.first + 1, cap.first + cap.continuation + 1] {
        let rows = attendance_rows("Ana", n);
        let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);
        assert_eq!(layout.page_count(), cap.pages_for(n), "rows = {n}");
    }

    assert_eq!(cap.pages_for(cap.first + 1), 2);
    assert_eq!(cap.pages_for(cap.first + cap.continuation + 1), 3);
}

#[test]
fn test_diary_page_count_matches_capacity() {
    let cfg = ReportConfig::default();
    let cap = diary_layout::capacity(&a4(), false);

    for n in [0, cap.first, cap.first + 1, cap.first + 2 * cap.continuation] {
        let rows: Vec<_> = (0..n)
            .map(|_| activity("Ana", "2025-08-13", "Dispensação", "Dra. Helena"))
            .collect();
        let layout = diary_layout::layout(&cfg, a4(), "Ana", &rows);
        assert_eq!(layout.page_count(), cap.pages_for(n), "rows = {n}");
    }
}

#[test]
fn test_column_header_not_repeated_by_default() {
    let cfg = ReportConfig::default();
    let rows = attendance_rows("Ana", 40);

    let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);
    assert_eq!(layout.page_count(), 2);
    assert!(layout.pages[0].contains("Ass. Estagiário"));
    assert!(!layout.pages[1].contains("Ass. Estagiário"));

    let cfg = ReportConfig {
        repeat_table_header: true,
        ..ReportConfig::default()
    };
    let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);
    assert!(layout.pages[1].contains("Ass. Estagiário"));
}

#[test]
fn test_rows_stay_above_bottom_threshold() {
    let cfg = ReportConfig::default();
    let rows = attendance_rows("Ana", 100);
    let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);

    let row_ops = layout.texts().filter(|t| t.text == "07:00:00");
    for op in row_ops {
        assert!(op.y >= 3.0 * CM - 0.01, "row drawn at {}", op.y);
    }
}

#[test]
fn test_signature_footer_on_last_page() {
    let cfg = ReportConfig::default();
    let rows = attendance_rows("Ana", 30);
    let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);

    let last = layout.pages.last().expect("page");
    let sup = last
        .texts
        .iter()
        .find(|t| t.text.starts_with("Assinatura do Supervisor"))
        .expect("supervisor line");
    assert!((sup.y - 3.0 * CM).abs() < 0.01);
    assert!(last.contains("Assinatura do Professor"));
    assert!(!layout.pages[0].contains("Assinatura do Professor"));
}

#[test]
fn test_full_last_page_moves_footer_to_new_page() {
    let cfg = ReportConfig::default();
    let cap = attendance_layout::capacity(&a4(), false);

    for n in [cap.first, cap.first + cap.continuation] {
        let rows = attendance_rows("Ana", n);
        let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);

        assert_eq!(layout.page_count(), cap.pages_for(n), "rows = {n}");
        let last = layout.pages.last().expect("page");
        assert!(last.contains("Assinatura do Supervisor"));
        assert!(!last.contains("07:00:00"), "rows = {n}: footer page holds rows");
    }

    assert_eq!(cap.pages_for(cap.first), 2);
    assert_eq!(cap.pages_for(cap.first - 1), 1);
    assert_eq!(cap.pages_for(cap.first + cap.continuation), 3);
}

#[test]
fn test_footer_never_overlaps_rows() {
    let cfg = ReportConfig::default();
    let att_cap = attendance_layout::capacity(&a4(), false);
    let dia_cap = diary_layout::capacity(&a4(), false);

    for n in 0..=att_cap.first + att_cap.continuation + 1 {
        let rows = attendance_rows("Ana", n);
        let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);
        assert_footer_clear(&layout, "07:00:00", n);
    }

    for n in 0..=dia_cap.first + dia_cap.continuation + 1 {
        let rows: Vec<_> = (0..n)
            .map(|_| activity("Ana", "2025-08-13", "Dispensação", "Dra. Helena"))
            .collect();
        let layout = diary_layout::layout(&cfg, a4(), "Ana", &rows);
        assert_eq!(layout.page_count(), dia_cap.pages_for(n), "rows = {n}");
        assert_footer_clear(&layout, "Dispensação", n);
    }
}

/// Every row on the footer page sits at least one text line above it.
fn assert_footer_clear(layout: &rinternlog::report::ReportLayout, row_marker: &str, n: usize) {
    let last = layout.pages.last().expect("page");
    let footer_y = last
        .texts
        .iter()
        .find(|t| t.text.starts_with("Assinatura do Supervisor"))
        .map(|t| t.y)
        .expect("footer");

    for row in last.texts.iter().filter(|t| t.text == row_marker) {
        assert!(
            row.y - footer_y >= 10.0,
            "rows = {n}: row at {} too close to footer at {footer_y}",
            row.y
        );
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[test]
fn test_long_activity_is_truncated_to_limit() {
    let cfg = ReportConfig::default();
    let long = "Conferência de receituário, dispensação e orientação farmacêutica ao paciente";
    let short = "Inventário do estoque";
    let rows = vec![
        activity("Ana", "2025-08-13", long, "Dra. Helena"),
        activity("Ana", "2025-08-14", short, "Dra. Helena"),
    ];

    let layout = diary_layout::layout(&cfg, a4(), "Ana", &rows);

    let expected: String = long.chars().take(50).collect();
    let cut = layout
        .texts()
        .find(|t| t.text.starts_with("Conferência"))
        .expect("activity cell");
    assert_eq!(cut.text, expected);
    assert_eq!(cut.text.chars().count(), 50);
    assert!(layout.texts().any(|t| t.text == short));
}

#[test]
fn test_report_never_mixes_subjects() {
    let cfg = ReportConfig::default();
    let mut rows = attendance_rows("Ana Souza", 3);
    let mut other = attendance("Bruno Lima", "2025-07-01", 4.0);
    other.supervisor_signature = "Supervisor Bruno".to_string();
    rows.insert(1, other);

    let layout = attendance_layout::layout(&cfg, a4(), "Ana Souza", &rows, "", None);
    assert!(!layout.texts().any(|t| t.text.contains("Bruno")));
    assert_eq!(layout.texts().filter(|t| t.text == "07:00:00").count(), 3);

    let diary = vec![
        activity("Ana Souza", "2025-08-13", "Recepção", "Dra. Helena"),
        activity("Bruno Lima", "2025-08-13", "Manipulação", "Dr. Caio"),
    ];
    let layout = diary_layout::layout(&cfg, a4(), "Bruno Lima", &diary);
    assert!(!layout.texts().any(|t| t.text.contains("Recepção")));
}

#[test]
fn test_rows_keep_stored_order() {
    let cfg = ReportConfig::default();
    let rows = vec![
        attendance("Ana", "2025-09-15", 6.0),
        attendance("Ana", "2025-08-13", 6.0),
    ];
    let layout = attendance_layout::layout(&cfg, a4(), "Ana", &rows, "", None);
    let dates: Vec<&str> = layout
        .texts()
        .filter(|t| t.text.starts_with("2025-"))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(dates, vec!["2025-09-15", "2025-08-13"]);
}

#[test]
fn test_rendered_reports_are_pdf_documents() {
    let cfg = ReportConfig::default();
    let rows = attendance_rows("Ana", 45);
    let bytes = render_attendance_report(&cfg, "Ana", &rows, None);
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.windows(b"/Count 2".len()).any(|w| w == b"/Count 2"));

    let diary = vec![activity("Ana", "2025-08-13", "Recepção", "Dra. Helena")];
    let bytes = render_activity_report(&cfg, "Ana", &diary);
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.windows(b"/Count 1".len()).any(|w| w == b"/Count 1"));
}

#[test]
fn test_report_file_names() {
    assert_eq!(
        report_file_name(RecordKind::Attendance, "Ana Maria Souza"),
        "controle_frequencia_Ana_Maria_Souza.pdf"
    );
    assert_eq!(
        report_file_name(RecordKind::Diary, " João  Lima "),
        "diario_campo_João_Lima.pdf"
    );
}

#[test]
fn test_win_ansi_encoding_of_portuguese_text() {
    assert_eq!(encode_win_ansi("Saída"), vec![b'S', b'a', 0xED, b'd', b'a']);
    assert_eq!(encode_win_ansi("LTDA – ATE")[5], 0x96);
    assert_eq!(encode_win_ansi("✓"), vec![b'?']);
}

// ---------------------------------------------------------------------------
// Logo
// ---------------------------------------------------------------------------

fn fake_jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut v = vec![0xFF, 0xD8];
    v.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F']);
    v.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    v.extend_from_slice(&height.to_be_bytes());
    v.extend_from_slice(&width.to_be_bytes());
    v.push(3);
    v.extend_from_slice(&[0u8; 9]);
    v.extend_from_slice(&[0xFF, 0xD9]);
    v
}

#[test]
fn test_logo_frame_size_is_read_from_jpeg() {
    let logo = Logo::from_jpeg(fake_jpeg(320, 120)).expect("jpeg");
    assert_eq!(logo.size(), (320, 120));
    assert_eq!(logo.components(), 3);
    assert!(!logo.has_alpha());

    let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    assert!(Logo::from_jpeg(png).is_err());
}

#[test]
fn test_logo_is_placed_with_aspect_ratio() {
    let cfg = ReportConfig::default();
    let layout = attendance_layout::layout(&cfg, a4(), "Ana", &[], "", Some((400, 100)));
    let img = layout.pages[0].image.expect("logo");
    assert!((img.width - 4.0 * CM).abs() < 0.01);
    assert!((img.height - CM).abs() < 0.01);
    assert!((img.y - (a4().top() - 3.0 * CM)).abs() < 0.01);
}

/// Minimal PNG file: one IDAT holding `scanlines` (filter byte included).
fn png_file(width: u32, height: u32, color_type: u8, extra: &[(&[u8; 4], Vec<u8>)], scanlines: &[u8]) -> Vec<u8> {
    fn chunk(out: &mut Vec<u8>, kind: &[u8; 4], body: &[u8]) {
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        let start = out.len();
        out.extend_from_slice(kind);
        out.extend_from_slice(body);
        let crc = crc32(&out[start..]);
        out.extend_from_slice(&crc.to_be_bytes());
    }

    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, color_type, 0, 0, 0]);

    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(scanlines).expect("deflate");
    let idat = enc.finish().expect("deflate");

    let mut out = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    chunk(&mut out, b"IHDR", &ihdr);
    for (kind, body) in extra {
        chunk(&mut out, kind, body);
    }
    chunk(&mut out, b"IDAT", &idat);
    chunk(&mut out, b"IEND", &[]);
    out
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out).expect("inflate");
    out
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_png_scanline_filters_are_undone() {
    // row 0 Sub-filtered, row 1 Up-filtered
    let scanlines = [
        1, 10, 20, 30, 5, 5, 5, //
        2, 2, 2, 2, 5, 5, 5,
    ];
    let logo = Logo::from_bytes(png_file(2, 2, 2, &[], &scanlines)).expect("png");

    assert_eq!(logo.size(), (2, 2));
    assert_eq!(logo.components(), 3);
    assert!(!logo.has_alpha());

    let LogoPixels::Flate { color, .. } = &logo.pixels else {
        panic!("png decodes to flate samples");
    };
    assert_eq!(
        inflate(color),
        vec![10, 20, 30, 15, 25, 35, 12, 22, 32, 20, 30, 40]
    );
}

#[test]
fn test_png_alpha_becomes_soft_mask() {
    // RGBA, Paeth-filtered single row: first pixel predicts from zero
    let scanlines = [4, 200, 100, 50, 0, 10, 10, 10, 255];
    let logo = Logo::from_png(&png_file(2, 1, 6, &[], &scanlines)).expect("png");

    let LogoPixels::Flate { color, alpha, .. } = &logo.pixels else {
        panic!("png decodes to flate samples");
    };
    assert_eq!(inflate(color), vec![200, 100, 50, 210, 110, 60]);
    assert_eq!(inflate(alpha.as_ref().expect("alpha")), vec![0, 255]);
}

#[test]
fn test_png_palette_with_transparency() {
    let palette = vec![255, 0, 0, 0, 0, 255];
    let trns = vec![128];
    let logo = Logo::from_png(&png_file(
        2,
        1,
        3,
        &[(b"PLTE", palette), (b"tRNS", trns)],
        &[0, 1, 0],
    ))
    .expect("png");

    let LogoPixels::Flate { color, alpha, components } = &logo.pixels else {
        panic!("png decodes to flate samples");
    };
    assert_eq!(*components, 3);
    assert_eq!(inflate(color), vec![0, 0, 255, 255, 0, 0]);
    assert_eq!(inflate(alpha.as_ref().expect("alpha")), vec![255, 128]);
}

#[test]
fn test_unsupported_png_is_rejected() {
    // 16-bit samples
    let mut bytes = png_file(1, 1, 2, &[], &[0, 1, 2, 3]);
    bytes[24] = 16;
    assert!(Logo::from_bytes(bytes).is_err());

    assert!(Logo::from_bytes(b"GIF89a".to_vec()).is_err());
}

fn report_with_logo(file: &str, bytes: &[u8]) -> Vec<u8> {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(file);
    std::fs::write(&path, bytes).expect("logo");

    let cfg = ReportConfig {
        logo_path: Some(path.to_string_lossy().to_string()),
        ..ReportConfig::default()
    };
    render_attendance_report(&cfg, "Ana", &attendance_rows("Ana", 2), None)
}

#[test]
fn test_jpeg_logo_is_embedded_in_pdf() {
    let pdf = report_with_logo("logo.jpg", &fake_jpeg(320, 120));

    assert!(contains(&pdf, b"/XObject"));
    assert!(contains(&pdf, b"/DCTDecode"));
    assert!(contains(&pdf, b"/Im1 Do"));
}

#[test]
fn test_png_logo_is_embedded_on_first_page() {
    let scanlines = [0, 0, 90, 160, 255, 0, 90, 160, 0];
    let pdf = report_with_logo("unifsa_logo.png", &png_file(2, 1, 6, &[], &scanlines));

    assert!(contains(&pdf, b"/XObject"));
    assert!(contains(&pdf, b"/FlateDecode"));
    assert!(contains(&pdf, b"/SMask"));
    assert!(contains(&pdf, b"/Im1 Do"));
    assert!(!contains(&pdf, b"/DCTDecode"));
}

#[test]
fn test_unreadable_logo_is_skipped() {
    let pdf = report_with_logo("logo.gif", b"GIF89a");
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(!contains(&pdf, b"/XObject"));
}
