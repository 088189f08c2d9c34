use k9::assert_equal as assert_eq;
use run_bidi::BidiClass::*;
use run_bidi::*;

struct Resolved {
    base_dir: ParagraphDirectionHint,
    levels: Vec<i8>,
    visual: Vec<usize>,
    max_level_plus_one: u8,
}

fn resolve(
    types: &[BidiClass],
    brackets: Option<&[BracketType]>,
    hint: ParagraphDirectionHint,
) -> Resolved {
    let _ = env_logger::Builder::new().is_test(true).try_init();

    let mut base_dir = hint;
    let mut levels = vec![Level::default(); types.len()];
    let max_level_plus_one =
        resolve_paragraph_levels(types, brackets, &mut base_dir, &mut levels).unwrap();

    let mut line_levels = levels.clone();
    let mut visual: Vec<usize> = (0..types.len()).collect();
    reorder_line::<char>(
        ReorderFlags::empty(),
        types,
        0..types.len(),
        base_dir,
        &mut line_levels,
        None,
        Some(visual.as_mut_slice()),
    );

    Resolved {
        base_dir,
        levels: levels.into_iter().map(|l| l.0).collect(),
        visual,
        max_level_plus_one,
    }
}

#[test]
fn all_ltr() {
    let r = resolve(
        &[LeftToRight, LeftToRight, LeftToRight],
        None,
        ParagraphDirectionHint::Auto,
    );
    assert_eq!(r.base_dir, ParagraphDirectionHint::LeftToRight);
    assert_eq!(r.levels, vec![0, 0, 0]);
    assert_eq!(r.visual, vec![0, 1, 2]);
    assert_eq!(r.max_level_plus_one, 1);
}

#[test]
fn all_rtl() {
    let r = resolve(
        &[RightToLeft, RightToLeft, RightToLeft],
        None,
        ParagraphDirectionHint::Auto,
    );
    assert_eq!(r.base_dir, ParagraphDirectionHint::RightToLeft);
    assert_eq!(r.levels, vec![1, 1, 1]);
    assert_eq!(r.visual, vec![2, 1, 0]);
    assert_eq!(r.max_level_plus_one, 2);
}

#[test]
fn rtl_inside_ltr() {
    let r = resolve(
        &[
            LeftToRight,
            LeftToRight,
            RightToLeft,
            RightToLeft,
            LeftToRight,
            LeftToRight,
        ],
        None,
        ParagraphDirectionHint::LeftToRight,
    );
    assert_eq!(r.levels, vec![0, 0, 1, 1, 0, 0]);
    assert_eq!(r.visual, vec![0, 1, 3, 2, 4, 5]);
}

#[test]
fn numbers_inside_rtl() {
    let r = resolve(
        &[
            RightToLeft,
            RightToLeft,
            EuropeanNumber,
            EuropeanNumber,
            RightToLeft,
            RightToLeft,
        ],
        None,
        ParagraphDirectionHint::RightToLeft,
    );
    assert_eq!(r.levels, vec![1, 1, 2, 2, 1, 1]);
    assert_eq!(r.visual, vec![5, 4, 2, 3, 1, 0]);
    assert_eq!(r.max_level_plus_one, 3);
}

#[test]
fn embedding_is_stripped_and_reinserted() {
    // LRE opens an even level, so the R inside resolves to 3
    let r = resolve(
        &[
            LeftToRight,
            LeftToRightEmbedding,
            RightToLeft,
            RightToLeft,
            PopDirectionalFormat,
            LeftToRight,
        ],
        None,
        ParagraphDirectionHint::LeftToRight,
    );
    assert_eq!(r.levels, vec![0, 0, 3, 3, 3, 0]);
    assert_eq!(r.visual, vec![0, 1, 4, 3, 2, 5]);

    let r = resolve(
        &[
            LeftToRight,
            RightToLeftEmbedding,
            RightToLeft,
            RightToLeft,
            PopDirectionalFormat,
            LeftToRight,
        ],
        None,
        ParagraphDirectionHint::LeftToRight,
    );
    assert_eq!(r.levels, vec![0, 0, 1, 1, 1, 0]);
    assert_eq!(r.visual, vec![0, 1, 4, 3, 2, 5]);
}

#[test]
fn bracket_pair_takes_preceding_strong_direction() {
    let types = [
        LeftToRight,
        OtherNeutral,
        RightToLeft,
        RightToLeft,
        OtherNeutral,
        LeftToRight,
    ];
    let brackets = [
        BracketType::None,
        BracketType::Open('('),
        BracketType::None,
        BracketType::None,
        BracketType::Close('('),
        BracketType::None,
    ];
    let r = resolve(&types, Some(&brackets[..]), ParagraphDirectionHint::LeftToRight);
    assert_eq!(r.levels, vec![0, 0, 1, 1, 0, 0]);
    assert_eq!(r.visual, vec![0, 1, 3, 2, 4, 5]);
}

#[test]
fn brackets_classified_from_text() {
    let text: Vec<char> = "A(b)".chars().collect();
    let types = [RightToLeft, OtherNeutral, LeftToRight, OtherNeutral];
    let mut brackets = vec![BracketType::None; text.len()];
    classify_bracket_batch(&text, &types, &mut brackets);

    // Only an L inside the pair, opposite to the RTL paragraph, and
    // the preceding strong is R: the brackets stay RTL.
    let r = resolve(&types, Some(&brackets[..]), ParagraphDirectionHint::RightToLeft);
    assert_eq!(r.levels, vec![1, 1, 2, 1]);
}

fn sample_paragraphs() -> Vec<Vec<BidiClass>> {
    vec![
        vec![LeftToRight, WhiteSpace, RightToLeft, EuropeanNumber, CommonSeparator, EuropeanNumber],
        vec![ArabicLetter, EuropeanNumber, EuropeanTerminator, WhiteSpace, NonspacingMark],
        vec![
            RightToLeftOverride,
            LeftToRight,
            LeftToRightIsolate,
            RightToLeft,
            PopDirectionalIsolate,
            PopDirectionalFormat,
            ArabicNumber,
        ],
        vec![
            FirstStrongIsolate,
            OtherNeutral,
            ArabicLetter,
            PopDirectionalIsolate,
            SegmentSeparator,
            LeftToRight,
            BoundaryNeutral,
            ParagraphSeparator,
        ],
        vec![WhiteSpace, BoundaryNeutral, PopDirectionalIsolate, WhiteSpace],
    ]
}

#[test]
fn levels_are_bounded_and_max_is_reported() {
    for types in sample_paragraphs() {
        for hint in [
            ParagraphDirectionHint::LeftToRight,
            ParagraphDirectionHint::RightToLeft,
            ParagraphDirectionHint::Auto,
        ] {
            let r = resolve(&types, None, hint);
            assert!(r.levels.iter().all(|&l| (0..=MAX_DEPTH as i8).contains(&l)));
            let max = r.levels.iter().copied().max().unwrap_or(0);
            assert_eq!(r.max_level_plus_one, max as u8 + 1);
        }
    }
}

#[test]
fn paragraph_separator_has_base_level() {
    let types = [
        RightToLeftEmbedding,
        LeftToRight,
        LeftToRightIsolate,
        RightToLeft,
        ParagraphSeparator,
    ];
    for (hint, base) in [
        (ParagraphDirectionHint::LeftToRight, 0),
        (ParagraphDirectionHint::RightToLeft, 1),
    ] {
        let r = resolve(&types, None, hint);
        assert_eq!(r.levels[4], base);
    }
}

#[test]
fn auto_direction_skips_isolates() {
    let types = [
        OtherNeutral,
        RightToLeftIsolate,
        LeftToRight,
        PopDirectionalIsolate,
        ArabicLetter,
    ];
    assert_eq!(
        resolve(&types, None, ParagraphDirectionHint::Auto).base_dir,
        ParagraphDirectionHint::RightToLeft
    );
    assert_eq!(
        detect_paragraph_direction(&types),
        ParagraphDirectionHint::RightToLeft
    );
}

#[test]
fn auto_direction_falls_back() {
    let types = [EuropeanNumber, WhiteSpace];
    assert_eq!(
        resolve(&types, None, ParagraphDirectionHint::Auto).base_dir,
        ParagraphDirectionHint::Auto
    );
    assert_eq!(
        resolve(&types, None, ParagraphDirectionHint::AutoRightToLeft).base_dir,
        ParagraphDirectionHint::RightToLeft
    );
    let r = resolve(&types, None, ParagraphDirectionHint::AutoLeftToRight);
    assert_eq!(r.base_dir, ParagraphDirectionHint::LeftToRight);
    assert_eq!(r.levels, vec![0, 0]);
}

#[test]
fn embedding_overflow() {
    let mut types = vec![LeftToRightEmbedding; 130];
    types.push(LeftToRight);
    types.extend(std::iter::repeat(PopDirectionalFormat).take(130));
    types.push(RightToLeft);

    let r = resolve(&types, None, ParagraphDirectionHint::LeftToRight);
    assert_eq!(r.levels[130], 124);
    assert_eq!(r.levels[261], 1);
    assert!(r.levels.iter().all(|&l| (0..=MAX_DEPTH as i8).contains(&l)));
}

#[test]
fn isolate_overflow() {
    let mut types = vec![LeftToRightIsolate; 130];
    types.push(LeftToRight);
    types.extend(std::iter::repeat(PopDirectionalIsolate).take(130));
    types.push(LeftToRight);

    let r = resolve(&types, None, ParagraphDirectionHint::LeftToRight);
    assert_eq!(r.levels[130], 124);
    assert_eq!(r.levels[261], 0);
    assert!(r.levels.iter().all(|&l| (0..=MAX_DEPTH as i8).contains(&l)));
    assert_eq!(r.max_level_plus_one, 125);
}

#[test]
fn unmatched_pdi_is_a_neutral() {
    let r = resolve(
        &[RightToLeft, PopDirectionalIsolate, RightToLeft, LeftToRight],
        None,
        ParagraphDirectionHint::LeftToRight,
    );
    // Resolved as ON between two R by N1
    assert_eq!(r.levels, vec![1, 1, 1, 0]);
}

#[test]
fn fsi_without_strong_letter_acts_as_lri() {
    let r = resolve(
        &[FirstStrongIsolate, ArabicNumber, PopDirectionalIsolate, LeftToRight],
        None,
        ParagraphDirectionHint::LeftToRight,
    );
    assert_eq!(r.levels, vec![0, 4, 0, 0]);

    let r = resolve(
        &[FirstStrongIsolate, ArabicNumber, RightToLeft, PopDirectionalIsolate, LeftToRight],
        None,
        ParagraphDirectionHint::LeftToRight,
    );
    assert_eq!(r.levels, vec![0, 2, 1, 0, 0]);
}

#[test]
fn l2_twice_restores_symmetric_levels() {
    let types = [
        LeftToRight,
        RightToLeft,
        RightToLeft,
        ArabicNumber,
        ArabicNumber,
        RightToLeft,
        RightToLeft,
        LeftToRight,
    ];
    let original: Vec<char> = "abcdefgh".chars().collect();
    let mut visual = original.clone();
    let mut levels: Vec<Level> = [0, 1, 1, 2, 2, 1, 1, 0].iter().map(|&l| Level(l)).collect();

    for _ in 0..2 {
        reorder_line(
            ReorderFlags::empty(),
            &types,
            0..types.len(),
            ParagraphDirectionHint::LeftToRight,
            &mut levels,
            Some(visual.as_mut_slice()),
            None,
        );
    }
    assert_eq!(visual, original);
}

#[test]
fn visual_matches_mapping() {
    let text: Vec<char> = "ab CDE 12 (fg) HI".chars().collect();
    let types: Vec<BidiClass> = text
        .iter()
        .map(|&c| match c {
            'a'..='z' => LeftToRight,
            'A'..='Z' => RightToLeft,
            '0'..='9' => EuropeanNumber,
            ' ' => WhiteSpace,
            _ => OtherNeutral,
        })
        .collect();
    let mut brackets = vec![BracketType::None; text.len()];
    classify_bracket_batch(&text, &types, &mut brackets);

    let mut base_dir = ParagraphDirectionHint::RightToLeft;
    let mut levels = vec![Level::default(); text.len()];
    resolve_paragraph_levels(&types, Some(&brackets[..]), &mut base_dir, &mut levels).unwrap();

    // Reorder the second half as a line of its own
    let line = 7..text.len();
    let mut visual = text.clone();
    let mut map: Vec<usize> = (0..text.len()).collect();
    reorder_line(
        ReorderFlags::REORDER_NSM,
        &types,
        line.clone(),
        base_dir,
        &mut levels,
        Some(visual.as_mut_slice()),
        Some(map.as_mut_slice()),
    );

    for i in line {
        assert_eq!(visual[i], text[map[i]]);
    }
    // Outside of the line nothing moved
    assert_eq!(&map[..7], &[0, 1, 2, 3, 4, 5, 6]);
}
