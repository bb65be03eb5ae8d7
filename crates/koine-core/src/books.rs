//! New Testament book table.
//!
//! Books are addressed two ways in the wild: MorphGNT numbers them 01–27,
//! the canonical Protestant numbering runs 40–66. The ranges do not
//! overlap, so [`BookInfo::from_number`] accepts either.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    /// Canonical number, 40 (Matthew) to 66 (Revelation).
    pub number: u8,
    pub id: &'static str,
    pub name: &'static str,
    /// Upstream MorphGNT SBLGNT file name.
    pub file: &'static str,
}

const fn book(number: u8, id: &'static str, name: &'static str, file: &'static str) -> BookInfo {
    BookInfo {
        number,
        id,
        name,
        file,
    }
}

pub const BOOKS: &[BookInfo] = &[
    book(40, "matthew", "マタイによる福音書", "61-Mt-morphgnt.txt"),
    book(41, "mark", "マルコによる福音書", "62-Mk-morphgnt.txt"),
    book(42, "luke", "ルカによる福音書", "63-Lk-morphgnt.txt"),
    book(43, "john", "ヨハネによる福音書", "64-Jn-morphgnt.txt"),
    book(44, "acts", "使徒行伝", "65-Ac-morphgnt.txt"),
    book(45, "romans", "ローマ人への手紙", "66-Ro-morphgnt.txt"),
    book(46, "1corinthians", "コリント人への第一の手紙", "67-1Co-morphgnt.txt"),
    book(47, "2corinthians", "コリント人への第二の手紙", "68-2Co-morphgnt.txt"),
    book(48, "galatians", "ガラテヤ人への手紙", "69-Ga-morphgnt.txt"),
    book(49, "ephesians", "エペソ人への手紙", "70-Eph-morphgnt.txt"),
    book(50, "philippians", "ピリピ人への手紙", "71-Php-morphgnt.txt"),
    book(51, "colossians", "コロサイ人への手紙", "72-Col-morphgnt.txt"),
    book(52, "1thessalonians", "テサロニケ人への第一の手紙", "73-1Th-morphgnt.txt"),
    book(53, "2thessalonians", "テサロニケ人への第二の手紙", "74-2Th-morphgnt.txt"),
    book(54, "1timothy", "テモテへの第一の手紙", "75-1Ti-morphgnt.txt"),
    book(55, "2timothy", "テモテへの第二の手紙", "76-2Ti-morphgnt.txt"),
    book(56, "titus", "テトスへの手紙", "77-Tit-morphgnt.txt"),
    book(57, "philemon", "ピレモンへの手紙", "78-Phm-morphgnt.txt"),
    book(58, "hebrews", "ヘブル人への手紙", "79-Heb-morphgnt.txt"),
    book(59, "james", "ヤコブの手紙", "80-Jas-morphgnt.txt"),
    book(60, "1peter", "ペテロの第一の手紙", "81-1Pe-morphgnt.txt"),
    book(61, "2peter", "ペテロの第二の手紙", "82-2Pe-morphgnt.txt"),
    book(62, "1john", "ヨハネの第一の手紙", "83-1Jn-morphgnt.txt"),
    book(63, "2john", "ヨハネの第二の手紙", "84-2Jn-morphgnt.txt"),
    book(64, "3john", "ヨハネの第三の手紙", "85-3Jn-morphgnt.txt"),
    book(65, "jude", "ユダの手紙", "86-Jud-morphgnt.txt"),
    book(66, "revelation", "ヨハネの黙示録", "87-Re-morphgnt.txt"),
];

/// Offset between MorphGNT book numbers and canonical numbers.
const MORPHGNT_OFFSET: u8 = 39;

impl BookInfo {
    /// Resolve a MorphGNT (1–27) or canonical (40–66) book number.
    pub fn from_number(n: u8) -> Option<&'static BookInfo> {
        let canonical = match n {
            1..=27 => n + MORPHGNT_OFFSET,
            40..=66 => n,
            _ => return None,
        };
        BOOKS.get(usize::from(canonical - 40))
    }

    pub fn from_id(id: &str) -> Option<&'static BookInfo> {
        BOOKS.iter().find(|b| b.id == id)
    }

    pub fn from_file_name(name: &str) -> Option<&'static BookInfo> {
        BOOKS.iter().find(|b| b.file == name)
    }
}
