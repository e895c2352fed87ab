//! Integration tests for envelope construction and rendering.

use chrono::NaiveDate;
use proptest::prelude::*;

use remit_x12::{
    DelimiterPolicy, Delimiters, EnvelopeBuilder, EnvelopeOptions, FixedControlNumbers, Segment,
    SequentialControlNumbers, X12Writer, to_x12_string, wrap_transaction,
};

fn options() -> EnvelopeOptions {
    let dt = NaiveDate::from_ymd_opt(2023, 11, 20)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    EnvelopeOptions::new()
        .with_sender("UHC123")
        .with_receiver("111222333")
        .with_generated_at(dt)
}

fn position(segments: &[Segment], tag: &str) -> usize {
    segments
        .iter()
        .position(|s| s.tag() == tag)
        .unwrap_or_else(|| panic!("missing {tag}"))
}

#[test]
fn test_renders_complete_interchange() {
    let mut controls = FixedControlNumbers::new(1, 1, 1);
    let delimiters = Delimiters::default().with_line_breaks(true);
    let segments = wrap_transaction(
        options(),
        &delimiters,
        &mut controls,
        "835",
        vec![Segment::with_elements("TRN", ["1", "CHK789456", "UHC123"])],
    )
    .unwrap();
    let text = to_x12_string(&segments, &delimiters, DelimiterPolicy::PassThrough).unwrap();

    let expected = "\
ISA*00*          *00*          *ZZ*UHC123         *ZZ*111222333      *231120*1430*U*00401*000000001*0*P*:~
GS*HP*UHC123*111222333*20231120*1430*1*X*005010X221A1~
ST*835*0001~
TRN*1*CHK789456*UHC123~
SE*3*0001~
GE*1*1~
IEA*1*000000001~
";
    assert_eq!(text, expected);
}

#[test]
fn test_isa_is_fixed_length() {
    let mut controls = SequentialControlNumbers::new();
    let delimiters = Delimiters::default();
    let segments =
        wrap_transaction(options(), &delimiters, &mut controls, "835", Vec::new()).unwrap();
    let isa = to_x12_string(&segments[..1], &delimiters, DelimiterPolicy::PassThrough).unwrap();
    // 105 characters plus the segment terminator
    assert_eq!(isa.len(), 106);
}

#[test]
fn test_component_separator_reaches_isa16() {
    let mut controls = SequentialControlNumbers::new();
    let delimiters = Delimiters::new('*', '>', '~').unwrap();
    let segments =
        wrap_transaction(options(), &delimiters, &mut controls, "835", Vec::new()).unwrap();
    assert_eq!(segments[0].value(16), Some(">"));
}

#[test]
fn test_sequential_source_numbers_consecutive_interchanges() {
    let mut controls = SequentialControlNumbers::new();
    let delimiters = Delimiters::default();
    let first = wrap_transaction(options(), &delimiters, &mut controls, "835", Vec::new()).unwrap();
    let second =
        wrap_transaction(options(), &delimiters, &mut controls, "835", Vec::new()).unwrap();

    assert_eq!(first[0].value(13), Some("000000001"));
    assert_eq!(second[0].value(13), Some("000000002"));
    assert_eq!(second.last().unwrap().value(2), Some("000000002"));
    assert_eq!(second[2].value(2), Some("0002"));
}

#[test]
fn test_builder_supports_multiple_groups() {
    let mut controls = SequentialControlNumbers::new();
    let mut builder = EnvelopeBuilder::new(options(), &Delimiters::default(), &mut controls);
    builder.open_interchange().unwrap();
    for _ in 0..2 {
        builder.open_group().unwrap();
        builder.open_transaction("835").unwrap();
        builder.close_transaction().unwrap();
        builder.close_group().unwrap();
    }
    builder.close_interchange().unwrap();
    let segments = builder.finish().unwrap();
    assert_eq!(segments.last().unwrap().value(1), Some("2"));
}

#[test]
fn test_writer_reports_segment_count() {
    let mut buffer = Vec::new();
    let written = X12Writer::new(&mut buffer)
        .write_segments(&[Segment::new("ST"), Segment::new("SE")])
        .unwrap();
    assert_eq!(written, 2);
    assert_eq!(buffer, b"ST~SE~");
}

proptest! {
    #[test]
    fn test_trailers_match_headers(
        body_len in 0usize..40,
        isa in 1u64..1_000_000,
        gs in 1u64..1_000_000,
        st in 1u64..1_000_000,
    ) {
        let mut controls = FixedControlNumbers::new(isa, gs, st);
        let body: Vec<Segment> = (0..body_len)
            .map(|i| Segment::with_elements("REF", ["EV", &i.to_string()]))
            .collect();
        let segments =
            wrap_transaction(options(), &Delimiters::default(), &mut controls, "835", body).unwrap();

        let st_idx = position(&segments, "ST");
        let se_idx = position(&segments, "SE");
        let se_count: usize = segments[se_idx].value(1).unwrap().parse().unwrap();
        prop_assert_eq!(se_count, se_idx - st_idx + 1);
        prop_assert_eq!(se_count, body_len + 2);

        prop_assert_eq!(segments[st_idx].value(2), segments[se_idx].value(2));
        let gs_idx = position(&segments, "GS");
        let ge_idx = position(&segments, "GE");
        prop_assert_eq!(segments[gs_idx].value(6), segments[ge_idx].value(2));
        let iea = segments.last().unwrap();
        prop_assert_eq!(segments[0].value(13), iea.value(2));
    }
}
