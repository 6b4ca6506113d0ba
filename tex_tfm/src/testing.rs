/*! Synthetic font metric files for tests. */

/// Assembles a `.tfm` file from its parts; the counts are derived from the parts.
#[derive(Clone,Debug)]
pub struct TfmBuilder {
    pub header:Vec<u32>,
    pub bc:u16,
    pub ec:u16,
    pub char_infos:Vec<[u8;4]>,
    pub widths:Vec<i32>,
    pub heights:Vec<i32>,
    pub depths:Vec<i32>,
    pub italics:Vec<i32>,
    /// `nl, nk, ne, np`; written as zero words.
    pub undecoded:[u16;4]
}

impl TfmBuilder {
    /// An empty header and all-zero character infos for `bc..=ec`.
    pub fn new(bc:u16,ec:u16) -> Self {
        let count = (ec as usize + 1).saturating_sub(bc as usize);
        TfmBuilder {
            header:Vec::new(),bc,ec,
            char_infos:vec![[0;4];count],
            widths:Vec::new(),heights:Vec::new(),depths:Vec::new(),italics:Vec::new(),
            undecoded:[0;4]
        }
    }
    pub fn header(mut self,words:&[u32]) -> Self {
        self.header = words.to_vec();
        self
    }
    /// The 18-word header: checksum, design size, coding scheme, identifier, face word.
    pub fn standard_header(mut self,checksum:u32,design_size:i32,scheme:&str,id:&str,seven_bit_safe:bool,face:u8) -> Self {
        let mut bytes = Vec::with_capacity(72);
        bytes.extend(checksum.to_be_bytes());
        bytes.extend(design_size.to_be_bytes());
        Self::block(&mut bytes,scheme,40);
        Self::block(&mut bytes,id,20);
        bytes.extend([if seven_bit_safe {0x80} else {0},0,0,face]);
        self.header = bytes.chunks(4).map(|c| u32::from_be_bytes([c[0],c[1],c[2],c[3]])).collect();
        self
    }
    fn block(bytes:&mut Vec<u8>,s:&str,len:usize) {
        bytes.push(s.len() as u8);
        bytes.extend(s.bytes());
        bytes.resize(bytes.len() + len - 1 - s.len(),0);
    }
    pub fn char_info(mut self,code:u8,word:[u8;4]) -> Self {
        let idx = code as usize - self.bc as usize;
        self.char_infos[idx] = word;
        self
    }
    pub fn widths(mut self,t:&[i32]) -> Self { self.widths = t.to_vec(); self }
    pub fn heights(mut self,t:&[i32]) -> Self { self.heights = t.to_vec(); self }
    pub fn depths(mut self,t:&[i32]) -> Self { self.depths = t.to_vec(); self }
    pub fn italics(mut self,t:&[i32]) -> Self { self.italics = t.to_vec(); self }
    pub fn undecoded(mut self,nl:u16,nk:u16,ne:u16,np:u16) -> Self {
        self.undecoded = [nl,nk,ne,np];
        self
    }

    /// `[lf, lh, bc, ec, nw, nh, nd, ni, nl, nk, ne, np]`
    pub fn counts(&self) -> [u16;12] {
        let [nl,nk,ne,np] = self.undecoded;
        let words = 6 + self.header.len() + self.char_infos.len()
            + self.widths.len() + self.heights.len() + self.depths.len() + self.italics.len()
            + self.undecoded.iter().map(|n| *n as usize).sum::<usize>();
        [
            words as u16,self.header.len() as u16,self.bc,self.ec,
            self.widths.len() as u16,self.heights.len() as u16,
            self.depths.len() as u16,self.italics.len() as u16,
            nl,nk,ne,np
        ]
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with(|_| ())
    }

    /// Builds the file with the counts altered by `f`; the body is written as if they were not.
    pub fn build_with<F:FnOnce(&mut [u16;12])>(&self,f:F) -> Vec<u8> {
        let mut counts = self.counts();
        f(&mut counts);
        let mut out = Vec::new();
        for c in counts { out.extend(c.to_be_bytes()); }
        for w in &self.header { out.extend(w.to_be_bytes()); }
        for ci in &self.char_infos { out.extend(ci); }
        for table in [&self.widths,&self.heights,&self.depths,&self.italics] {
            for v in table { out.extend(v.to_be_bytes()); }
        }
        let rest:usize = self.undecoded.iter().map(|n| *n as usize).sum();
        out.resize(out.len() + 4 * rest,0);
        out
    }
}

#[cfg(test)]
#[allow(unused_must_use)]
pub fn debug() {
    env_logger::builder().filter_level(log::LevelFilter::Debug).is_test(true).try_init();
}
