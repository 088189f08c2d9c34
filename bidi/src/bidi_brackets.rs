//! Generated from bidi/data/BidiBrackets.txt by bidi/generate/src/main.rs
use crate::bracket::BracketKind;

/// (codepoint, pair id, kind); the pair id is the canonical opening bracket
pub const BIDI_BRACKETS: &[(char, char, BracketKind)] = &[
    ('\u{28}', '\u{28}', BracketKind::Open), // LEFT PARENTHESIS
    ('\u{29}', '\u{28}', BracketKind::Close), // RIGHT PARENTHESIS
    ('\u{5b}', '\u{5b}', BracketKind::Open), // LEFT SQUARE BRACKET
    ('\u{5d}', '\u{5b}', BracketKind::Close), // RIGHT SQUARE BRACKET
    ('\u{7b}', '\u{7b}', BracketKind::Open), // LEFT CURLY BRACKET
    ('\u{7d}', '\u{7b}', BracketKind::Close), // RIGHT CURLY BRACKET
    ('\u{f3a}', '\u{f3a}', BracketKind::Open), // TIBETAN MARK GUG RTAGS GYON
    ('\u{f3b}', '\u{f3a}', BracketKind::Close), // TIBETAN MARK GUG RTAGS GYAS
    ('\u{f3c}', '\u{f3c}', BracketKind::Open), // TIBETAN MARK ANG KHANG GYON
    ('\u{f3d}', '\u{f3c}', BracketKind::Close), // TIBETAN MARK ANG KHANG GYAS
    ('\u{169b}', '\u{169b}', BracketKind::Open), // OGHAM FEATHER MARK
    ('\u{169c}', '\u{169b}', BracketKind::Close), // OGHAM REVERSED FEATHER MARK
    ('\u{2045}', '\u{2045}', BracketKind::Open), // LEFT SQUARE BRACKET WITH QUILL
    ('\u{2046}', '\u{2045}', BracketKind::Close), // RIGHT SQUARE BRACKET WITH QUILL
    ('\u{207d}', '\u{207d}', BracketKind::Open), // SUPERSCRIPT LEFT PARENTHESIS
    ('\u{207e}', '\u{207d}', BracketKind::Close), // SUPERSCRIPT RIGHT PARENTHESIS
    ('\u{208d}', '\u{208d}', BracketKind::Open), // SUBSCRIPT LEFT PARENTHESIS
    ('\u{208e}', '\u{208d}', BracketKind::Close), // SUBSCRIPT RIGHT PARENTHESIS
    ('\u{2308}', '\u{2308}', BracketKind::Open), // LEFT CEILING
    ('\u{2309}', '\u{2308}', BracketKind::Close), // RIGHT CEILING
    ('\u{230a}', '\u{230a}', BracketKind::Open), // LEFT FLOOR
    ('\u{230b}', '\u{230a}', BracketKind::Close), // RIGHT FLOOR
    ('\u{2329}', '\u{3008}', BracketKind::Open), // LEFT-POINTING ANGLE BRACKET
    ('\u{232a}', '\u{3008}', BracketKind::Close), // RIGHT-POINTING ANGLE BRACKET
    ('\u{2768}', '\u{2768}', BracketKind::Open), // MEDIUM LEFT PARENTHESIS ORNAMENT
    ('\u{2769}', '\u{2768}', BracketKind::Close), // MEDIUM RIGHT PARENTHESIS ORNAMENT
    ('\u{276a}', '\u{276a}', BracketKind::Open), // MEDIUM FLATTENED LEFT PARENTHESIS ORNAMENT
    ('\u{276b}', '\u{276a}', BracketKind::Close), // MEDIUM FLATTENED RIGHT PARENTHESIS ORNAMENT
    ('\u{276c}', '\u{276c}', BracketKind::Open), // MEDIUM LEFT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{276d}', '\u{276c}', BracketKind::Close), // MEDIUM RIGHT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{276e}', '\u{276e}', BracketKind::Open), // HEAVY LEFT-POINTING ANGLE QUOTATION MARK ORNAMENT
    ('\u{276f}', '\u{276e}', BracketKind::Close), // HEAVY RIGHT-POINTING ANGLE QUOTATION MARK ORNAMENT
    ('\u{2770}', '\u{2770}', BracketKind::Open), // HEAVY LEFT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{2771}', '\u{2770}', BracketKind::Close), // HEAVY RIGHT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{2772}', '\u{2772}', BracketKind::Open), // LIGHT LEFT TORTOISE SHELL BRACKET ORNAMENT
    ('\u{2773}', '\u{2772}', BracketKind::Close), // LIGHT RIGHT TORTOISE SHELL BRACKET ORNAMENT
    ('\u{2774}', '\u{2774}', BracketKind::Open), // MEDIUM LEFT CURLY BRACKET ORNAMENT
    ('\u{2775}', '\u{2774}', BracketKind::Close), // MEDIUM RIGHT CURLY BRACKET ORNAMENT
    ('\u{27c5}', '\u{27c5}', BracketKind::Open), // LEFT S-SHAPED BAG DELIMITER
    ('\u{27c6}', '\u{27c5}', BracketKind::Close), // RIGHT S-SHAPED BAG DELIMITER
    ('\u{27e6}', '\u{27e6}', BracketKind::Open), // MATHEMATICAL LEFT WHITE SQUARE BRACKET
    ('\u{27e7}', '\u{27e6}', BracketKind::Close), // MATHEMATICAL RIGHT WHITE SQUARE BRACKET
    ('\u{27e8}', '\u{27e8}', BracketKind::Open), // MATHEMATICAL LEFT ANGLE BRACKET
    ('\u{27e9}', '\u{27e8}', BracketKind::Close), // MATHEMATICAL RIGHT ANGLE BRACKET
    ('\u{27ea}', '\u{27ea}', BracketKind::Open), // MATHEMATICAL LEFT DOUBLE ANGLE BRACKET
    ('\u{27eb}', '\u{27ea}', BracketKind::Close), // MATHEMATICAL RIGHT DOUBLE ANGLE BRACKET
    ('\u{27ec}', '\u{27ec}', BracketKind::Open), // MATHEMATICAL LEFT WHITE TORTOISE SHELL BRACKET
    ('\u{27ed}', '\u{27ec}', BracketKind::Close), // MATHEMATICAL RIGHT WHITE TORTOISE SHELL BRACKET
    ('\u{27ee}', '\u{27ee}', BracketKind::Open), // MATHEMATICAL LEFT FLATTENED PARENTHESIS
    ('\u{27ef}', '\u{27ee}', BracketKind::Close), // MATHEMATICAL RIGHT FLATTENED PARENTHESIS
    ('\u{2983}', '\u{2983}', BracketKind::Open), // LEFT WHITE CURLY BRACKET
    ('\u{2984}', '\u{2983}', BracketKind::Close), // RIGHT WHITE CURLY BRACKET
    ('\u{2985}', '\u{2985}', BracketKind::Open), // LEFT WHITE PARENTHESIS
    ('\u{2986}', '\u{2985}', BracketKind::Close), // RIGHT WHITE PARENTHESIS
    ('\u{2987}', '\u{2987}', BracketKind::Open), // Z NOTATION LEFT IMAGE BRACKET
    ('\u{2988}', '\u{2987}', BracketKind::Close), // Z NOTATION RIGHT IMAGE BRACKET
    ('\u{2989}', '\u{2989}', BracketKind::Open), // Z NOTATION LEFT BINDING BRACKET
    ('\u{298a}', '\u{2989}', BracketKind::Close), // Z NOTATION RIGHT BINDING BRACKET
    ('\u{298b}', '\u{298b}', BracketKind::Open), // LEFT SQUARE BRACKET WITH UNDERBAR
    ('\u{298c}', '\u{298b}', BracketKind::Close), // RIGHT SQUARE BRACKET WITH UNDERBAR
    ('\u{298d}', '\u{298d}', BracketKind::Open), // LEFT SQUARE BRACKET WITH TICK IN TOP CORNER
    ('\u{298e}', '\u{298f}', BracketKind::Close), // RIGHT SQUARE BRACKET WITH TICK IN BOTTOM CORNER
    ('\u{298f}', '\u{298f}', BracketKind::Open), // LEFT SQUARE BRACKET WITH TICK IN BOTTOM CORNER
    ('\u{2990}', '\u{298d}', BracketKind::Close), // RIGHT SQUARE BRACKET WITH TICK IN TOP CORNER
    ('\u{2991}', '\u{2991}', BracketKind::Open), // LEFT ANGLE BRACKET WITH DOT
    ('\u{2992}', '\u{2991}', BracketKind::Close), // RIGHT ANGLE BRACKET WITH DOT
    ('\u{2993}', '\u{2993}', BracketKind::Open), // LEFT ARC LESS-THAN BRACKET
    ('\u{2994}', '\u{2993}', BracketKind::Close), // RIGHT ARC GREATER-THAN BRACKET
    ('\u{2995}', '\u{2995}', BracketKind::Open), // DOUBLE LEFT ARC GREATER-THAN BRACKET
    ('\u{2996}', '\u{2995}', BracketKind::Close), // DOUBLE RIGHT ARC LESS-THAN BRACKET
    ('\u{2997}', '\u{2997}', BracketKind::Open), // LEFT BLACK TORTOISE SHELL BRACKET
    ('\u{2998}', '\u{2997}', BracketKind::Close), // RIGHT BLACK TORTOISE SHELL BRACKET
    ('\u{29d8}', '\u{29d8}', BracketKind::Open), // LEFT WIGGLY FENCE
    ('\u{29d9}', '\u{29d8}', BracketKind::Close), // RIGHT WIGGLY FENCE
    ('\u{29da}', '\u{29da}', BracketKind::Open), // LEFT DOUBLE WIGGLY FENCE
    ('\u{29db}', '\u{29da}', BracketKind::Close), // RIGHT DOUBLE WIGGLY FENCE
    ('\u{29fc}', '\u{29fc}', BracketKind::Open), // LEFT-POINTING CURVED ANGLE BRACKET
    ('\u{29fd}', '\u{29fc}', BracketKind::Close), // RIGHT-POINTING CURVED ANGLE BRACKET
    ('\u{2e22}', '\u{2e22}', BracketKind::Open), // TOP LEFT HALF BRACKET
    ('\u{2e23}', '\u{2e22}', BracketKind::Close), // TOP RIGHT HALF BRACKET
    ('\u{2e24}', '\u{2e24}', BracketKind::Open), // BOTTOM LEFT HALF BRACKET
    ('\u{2e25}', '\u{2e24}', BracketKind::Close), // BOTTOM RIGHT HALF BRACKET
    ('\u{2e26}', '\u{2e26}', BracketKind::Open), // LEFT SIDEWAYS U BRACKET
    ('\u{2e27}', '\u{2e26}', BracketKind::Close), // RIGHT SIDEWAYS U BRACKET
    ('\u{2e28}', '\u{2e28}', BracketKind::Open), // LEFT DOUBLE PARENTHESIS
    ('\u{2e29}', '\u{2e28}', BracketKind::Close), // RIGHT DOUBLE PARENTHESIS
    ('\u{2e55}', '\u{2e55}', BracketKind::Open), // LEFT SQUARE BRACKET WITH STROKE
    ('\u{2e56}', '\u{2e55}', BracketKind::Close), // RIGHT SQUARE BRACKET WITH STROKE
    ('\u{2e57}', '\u{2e57}', BracketKind::Open), // LEFT SQUARE BRACKET WITH DOUBLE STROKE
    ('\u{2e58}', '\u{2e57}', BracketKind::Close), // RIGHT SQUARE BRACKET WITH DOUBLE STROKE
    ('\u{2e59}', '\u{2e59}', BracketKind::Open), // TOP HALF LEFT PARENTHESIS
    ('\u{2e5a}', '\u{2e59}', BracketKind::Close), // TOP HALF RIGHT PARENTHESIS
    ('\u{2e5b}', '\u{2e5b}', BracketKind::Open), // BOTTOM HALF LEFT PARENTHESIS
    ('\u{2e5c}', '\u{2e5b}', BracketKind::Close), // BOTTOM HALF RIGHT PARENTHESIS
    ('\u{3008}', '\u{3008}', BracketKind::Open), // LEFT ANGLE BRACKET
    ('\u{3009}', '\u{3008}', BracketKind::Close), // RIGHT ANGLE BRACKET
    ('\u{300a}', '\u{300a}', BracketKind::Open), // LEFT DOUBLE ANGLE BRACKET
    ('\u{300b}', '\u{300a}', BracketKind::Close), // RIGHT DOUBLE ANGLE BRACKET
    ('\u{300c}', '\u{300c}', BracketKind::Open), // LEFT CORNER BRACKET
    ('\u{300d}', '\u{300c}', BracketKind::Close), // RIGHT CORNER BRACKET
    ('\u{300e}', '\u{300e}', BracketKind::Open), // LEFT WHITE CORNER BRACKET
    ('\u{300f}', '\u{300e}', BracketKind::Close), // RIGHT WHITE CORNER BRACKET
    ('\u{3010}', '\u{3010}', BracketKind::Open), // LEFT BLACK LENTICULAR BRACKET
    ('\u{3011}', '\u{3010}', BracketKind::Close), // RIGHT BLACK LENTICULAR BRACKET
    ('\u{3014}', '\u{3014}', BracketKind::Open), // LEFT TORTOISE SHELL BRACKET
    ('\u{3015}', '\u{3014}', BracketKind::Close), // RIGHT TORTOISE SHELL BRACKET
    ('\u{3016}', '\u{3016}', BracketKind::Open), // LEFT WHITE LENTICULAR BRACKET
    ('\u{3017}', '\u{3016}', BracketKind::Close), // RIGHT WHITE LENTICULAR BRACKET
    ('\u{3018}', '\u{3018}', BracketKind::Open), // LEFT WHITE TORTOISE SHELL BRACKET
    ('\u{3019}', '\u{3018}', BracketKind::Close), // RIGHT WHITE TORTOISE SHELL BRACKET
    ('\u{301a}', '\u{301a}', BracketKind::Open), // LEFT WHITE SQUARE BRACKET
    ('\u{301b}', '\u{301a}', BracketKind::Close), // RIGHT WHITE SQUARE BRACKET
    ('\u{fe59}', '\u{fe59}', BracketKind::Open), // SMALL LEFT PARENTHESIS
    ('\u{fe5a}', '\u{fe59}', BracketKind::Close), // SMALL RIGHT PARENTHESIS
    ('\u{fe5b}', '\u{fe5b}', BracketKind::Open), // SMALL LEFT CURLY BRACKET
    ('\u{fe5c}', '\u{fe5b}', BracketKind::Close), // SMALL RIGHT CURLY BRACKET
    ('\u{fe5d}', '\u{fe5d}', BracketKind::Open), // SMALL LEFT TORTOISE SHELL BRACKET
    ('\u{fe5e}', '\u{fe5d}', BracketKind::Close), // SMALL RIGHT TORTOISE SHELL BRACKET
    ('\u{ff08}', '\u{ff08}', BracketKind::Open), // FULLWIDTH LEFT PARENTHESIS
    ('\u{ff09}', '\u{ff08}', BracketKind::Close), // FULLWIDTH RIGHT PARENTHESIS
    ('\u{ff3b}', '\u{ff3b}', BracketKind::Open), // FULLWIDTH LEFT SQUARE BRACKET
    ('\u{ff3d}', '\u{ff3b}', BracketKind::Close), // FULLWIDTH RIGHT SQUARE BRACKET
    ('\u{ff5b}', '\u{ff5b}', BracketKind::Open), // FULLWIDTH LEFT CURLY BRACKET
    ('\u{ff5d}', '\u{ff5b}', BracketKind::Close), // FULLWIDTH RIGHT CURLY BRACKET
    ('\u{ff5f}', '\u{ff5f}', BracketKind::Open), // FULLWIDTH LEFT WHITE PARENTHESIS
    ('\u{ff60}', '\u{ff5f}', BracketKind::Close), // FULLWIDTH RIGHT WHITE PARENTHESIS
    ('\u{ff62}', '\u{ff62}', BracketKind::Open), // HALFWIDTH LEFT CORNER BRACKET
    ('\u{ff63}', '\u{ff62}', BracketKind::Close), // HALFWIDTH RIGHT CORNER BRACKET
];
