// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but longer numbers have
// been seen in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &str = "+";
pub const STAR_SIGN: &str = "*";
pub const PLUS_CHARS: &str = "+\u{FF0B}";

// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. It consists of
// dash characters, white space, full stops, slashes, square brackets,
// parentheses and tildes, plus the letter 'x' which appears as a carrier
// information placeholder in some numbers. Full-width variants included.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const DIGITS: &str = r"\p{Nd}";
pub const VALID_ALPHA: &str = "a-z";

// Characters that start a second phone number when two were glued together,
// e.g. "(530) 583-6985 x302/x2303": everything from the slash on belongs to
// a second number and is dropped so the first parses cleanly. The part
// preceding the marker is captured.
pub const CAPTURE_UP_TO_SECOND_NUMBER_START: &str = r"(.*)[\\/] *x";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";

// Default prefix put in front of an extension when formatting, unless the
// region declares its own preference.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";
