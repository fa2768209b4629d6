pub struct LineBreak;

impl LineBreak {
    pub const TOKEN: &'static [u8; 2] = b"\\\\";
}
