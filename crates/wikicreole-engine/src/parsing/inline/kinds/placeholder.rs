pub struct Placeholder;

impl Placeholder {
    pub const OPEN: &'static [u8; 3] = b"<<<";
    pub const CLOSE: &'static [u8; 3] = b">>>";
}
