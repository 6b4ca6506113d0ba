use log::debug;
use crate::errors::{Check, Diagnostic};
use crate::fixword::FixWord;
use crate::metrics::{CharInfo, FontMetrics, TableSizes};
use crate::reader::{BinaryReader, Endian, EndOfStream};

/// Bytes taken up by the twelve 16-bit counts.
const PREAMBLE_BYTES: usize = 24;
/// Header words needed for each optional header field.
const CHECKSUM_WORDS: u16 = 1;
const DESIGN_SIZE_WORDS: u16 = 2;
const CODING_SCHEME_WORDS: u16 = DESIGN_SIZE_WORDS + 10;
const FONT_ID_WORDS: u16 = CODING_SCHEME_WORDS + 5;
const FACE_WORDS: u16 = FONT_ID_WORDS + 1;
const CODING_SCHEME_MAX: u8 = 39;
const FONT_ID_MAX: u8 = 19;

/// The twelve counts at the start of every `.tfm` file.
#[derive(Copy,Clone,Debug)]
struct Counts {
    lf:u16, lh:u16, bc:u16, ec:u16,
    nw:u16, nh:u16, nd:u16, ni:u16,
    nl:u16, nk:u16, ne:u16, np:u16
}
impl Counts {
    fn read<R:BinaryReader + ?Sized>(lf:u16,stream:&mut R) -> Result<Self,EndOfStream> {
        Ok(Counts {
            lf,
            lh:stream.read_u16()?, bc:stream.read_u16()?, ec:stream.read_u16()?,
            nw:stream.read_u16()?, nh:stream.read_u16()?, nd:stream.read_u16()?, ni:stream.read_u16()?,
            nl:stream.read_u16()?, nk:stream.read_u16()?, ne:stream.read_u16()?, np:stream.read_u16()?
        })
    }
    /// Only meaningful once the character range has been validated.
    fn char_count(&self) -> u32 {
        (self.ec as u32 + 1).saturating_sub(self.bc as u32)
    }
    fn validate(&self,size:usize) -> Result<(),Diagnostic> {
        if self.lf < 6 {
            return Err(Diagnostic::format(Check::FileLengthTooSmall,
                "TFM file not large enough to hold its header."))
        }
        if self.lf as usize * 4 != size {
            return Err(Diagnostic::format(Check::FileSizeMismatch,
                format!("TFM file claims {} bytes, but has {}.",self.lf as usize * 4,size)))
        }
        if (self.bc > 0 && self.bc - 1 > self.ec) || self.ec > 255 {
            return Err(Diagnostic::format(Check::BadCharacterRange,
                format!("Bad character range {}..{} in TFM file.",self.bc,self.ec)))
        }
        if self.ne > 256 {
            return Err(Diagnostic::format(Check::TooManyExtensibleCharacters,
                format!("Extensible character table has {} entries; at most 256 are allowed.",self.ne)))
        }
        let expected = 6 + self.lh as u32 + self.char_count()
            + self.nw as u32 + self.nh as u32 + self.nd as u32 + self.ni as u32
            + self.nl as u32 + self.nk as u32 + self.ne as u32 + self.np as u32;
        if expected != self.lf as u32 {
            return Err(Diagnostic::format(Check::InconsistentSubFileSizes,
                format!("Table sizes add up to {} words, but the file has {}.",expected,self.lf)))
        }
        Ok(())
    }
}

/** Decodes a font metric file from `stream`, starting at offset 0.

Every structural rule is checked before the record is allocated; violations of the header
string lengths are found while reading the header. In either case the result is a
[`Diagnostic`] and no [`FontMetrics`] is produced.
*/
pub fn decode<R:BinaryReader + ?Sized>(stream:&mut R) -> Result<FontMetrics,Diagnostic> {
    stream.set_endian(Endian::Big);
    let size = stream.size();
    if size < PREAMBLE_BYTES {
        return Err(Diagnostic::format(Check::FileTooSmall,"TFM file not large enough."))
    }
    stream.seek(0).map_err(Diagnostic::internal)?;
    let lf = stream.read_u16().map_err(Diagnostic::internal)?;
    if lf < 6 {
        return Err(Diagnostic::format(Check::FileLengthTooSmall,
            "TFM file not large enough to hold its header."))
    }
    let counts = Counts::read(lf,stream).map_err(Diagnostic::internal)?;
    counts.validate(size)?;
    debug!("Decoding TFM file: {} bytes, characters {}..={}, tables {}/{}/{}/{}",
        size,counts.bc,counts.ec,counts.nw,counts.nh,counts.nd,counts.ni);

    let mut metrics = FontMetrics::empty(counts.bc,counts.ec);
    metrics.char_infos.reserve_exact(counts.char_count() as usize);
    metrics.table_sizes = TableSizes {
        lig_kern:counts.nl, kern:counts.nk, extensible:counts.ne, params:counts.np
    };

    read_header(stream,counts.lh,&mut metrics)?;
    read_body(stream,&counts,&mut metrics).map_err(Diagnostic::internal)?;
    debug!("Decoded TFM file {:?}",metrics.font_identifier);
    Ok(metrics)
}

fn read_header<R:BinaryReader + ?Sized>(stream:&mut R,lh:u16,metrics:&mut FontMetrics) -> Result<(),Diagnostic> {
    let end = PREAMBLE_BYTES + 4 * lh as usize;
    if lh >= CHECKSUM_WORDS {
        metrics.checksum = stream.read_u32().map_err(Diagnostic::internal)?;
    }
    if lh >= DESIGN_SIZE_WORDS {
        metrics.design_size = FixWord::from_word(stream.read_u32().map_err(Diagnostic::internal)?);
    }
    if lh >= CODING_SCHEME_WORDS {
        metrics.coding_scheme = read_string::<R,39>(stream,CODING_SCHEME_MAX,Check::CodingSchemeTooLong,
            "TFM header has a bad character coding scheme length byte.")?;
    }
    if lh >= FONT_ID_WORDS {
        metrics.font_identifier = read_string::<R,19>(stream,FONT_ID_MAX,Check::FontIdentifierTooLong,
            "TFM header has a bad font identifier length byte.")?;
    }
    if lh >= FACE_WORDS {
        let [flags,_,_,face] = stream.read_u32().map_err(Diagnostic::internal)?.to_be_bytes();
        metrics.seven_bit_safe = flags & 0x80 != 0;
        metrics.face = face;
    }
    // incomplete trailing fields and additional header words are skipped
    stream.seek(end).map_err(Diagnostic::internal)
}

/// A length byte followed by a fixed block of `N` bytes.
fn read_string<R:BinaryReader + ?Sized,const N:usize>(stream:&mut R,max:u8,check:Check,msg:&str) -> Result<String,Diagnostic> {
    let len = stream.read_u8().map_err(Diagnostic::internal)?;
    if len > max {
        return Err(Diagnostic::format(check,msg))
    }
    let mut block = [0u8;N];
    stream.read_bytes(&mut block).map_err(Diagnostic::internal)?;
    Ok(String::from_utf8_lossy(&block[..len as usize]).into_owned())
}

fn read_body<R:BinaryReader + ?Sized>(stream:&mut R,counts:&Counts,metrics:&mut FontMetrics) -> Result<(),EndOfStream> {
    for _ in 0..counts.char_count() {
        let mut word = [0u8;4];
        stream.read_bytes(&mut word)?;
        metrics.char_infos.push(CharInfo::from_bytes(word));
    }
    metrics.widths = read_table(stream,counts.nw)?;
    metrics.heights = read_table(stream,counts.nh)?;
    metrics.depths = read_table(stream,counts.nd)?;
    metrics.italics = read_table(stream,counts.ni)?;
    Ok(())
}

fn read_table<R:BinaryReader + ?Sized>(stream:&mut R,len:u16) -> Result<Vec<FixWord>,EndOfStream> {
    (0..len).map(|_| stream.read_u32().map(FixWord::from_word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiagnosticKind;
    use crate::testing::TfmBuilder;

    fn err(bytes:&[u8]) -> Diagnostic {
        FontMetrics::from_bytes(bytes).unwrap_err()
    }

    fn sample() -> TfmBuilder {
        TfmBuilder::new(65,67)
            .standard_header(0xDEAD_BEEF,10 << 20,"TeX text","CMR",true,2)
            .char_info(65,[1,0x11,0b0000_0100,0])
            .char_info(66,[2,0x21,0,0])
            .char_info(67,[0,0,0,0])
            .widths(&[0,1 << 19,3 << 18])
            .heights(&[0,1 << 20,2 << 20])
            .depths(&[0,-(1 << 18)])
            .italics(&[0,1 << 16])
            .undecoded(3,2,1,7)
    }

    #[test]
    fn too_small() {
        for len in 0..24 {
            let d = err(&vec![0u8;len]);
            assert_eq!(d.origin,Check::FileTooSmall);
            assert_eq!(d.kind,DiagnosticKind::Format);
        }
    }

    #[test]
    fn decodes_everything_written() {
        crate::testing::debug();
        let font = FontMetrics::from_bytes(&sample().build()).unwrap();
        assert_eq!(font.checksum(),0xDEAD_BEEF);
        assert_eq!(font.design_size(),FixWord::from_raw(10 << 20));
        assert_eq!(font.design_size().to_string(),"10.00000000000000000000");
        assert_eq!(font.coding_scheme(),"TeX text");
        assert_eq!(font.font_identifier(),"CMR");
        assert!(font.seven_bit_safe());
        assert_eq!(font.face(),2);
        assert_eq!((font.char_lower(),font.char_upper(),font.char_count()),(65,67,3));
        assert_eq!(font.widths().len(),3);
        assert_eq!(font.heights()[2].to_f64(),2.0);
        assert_eq!(font.depths()[1].to_f64(),-0.25);
        assert_eq!(font.italics()[1],FixWord::from_raw(1 << 16));
        assert_eq!(font.table_sizes(),TableSizes { lig_kern:3, kern:2, extensible:1, params:7 });

        let a = font.dimensions(b'A').unwrap();
        assert_eq!(a.width.to_f64(),0.5);
        assert_eq!(a.height.to_f64(),1.0);
        assert_eq!(a.depth.to_f64(),-0.25);
        assert_eq!(a.italic_correction,FixWord::from_raw(1 << 16));
        assert_eq!(font.dimensions(b'B').unwrap().width.to_f64(),0.75);
        assert!(font.char_info(b'C').is_some());
        assert!(font.dimensions(b'C').is_none());
        assert!(font.dimensions(b'D').is_none());
        assert!(font.dimensions(b'@').is_none());
    }

    #[test]
    fn header_stages_follow_lh() {
        let font = FontMetrics::from_bytes(&TfmBuilder::new(1,0).header(&[]).build()).unwrap();
        assert_eq!((font.checksum(),font.design_size()),(0,FixWord::ZERO));

        let font = FontMetrics::from_bytes(&TfmBuilder::new(1,0).header(&[7]).build()).unwrap();
        assert_eq!((font.checksum(),font.design_size()),(7,FixWord::ZERO));

        // a partial coding scheme block is skipped, the character table is still found
        let font = FontMetrics::from_bytes(&TfmBuilder::new(0,0)
            .header(&[7,3 << 20,0x0441_4243,0,0,0,0])
            .char_info(0,[1,0,0,0]).widths(&[0,1 << 20]).build()).unwrap();
        assert_eq!(font.design_size().to_f64(),3.0);
        assert_eq!(font.coding_scheme(),"");
        assert_eq!(font.dimensions(0).unwrap().width.to_f64(),1.0);

        // extra header words after the face word are ignored
        let mut b = TfmBuilder::new(0,0)
            .standard_header(1,1 << 20,"ASCII","ID",false,5)
            .char_info(0,[1,0,0,0]).widths(&[0,1 << 19]);
        b.header.extend([0xFFFF_FFFF;3]);
        let font = FontMetrics::from_bytes(&b.build()).unwrap();
        assert_eq!((font.coding_scheme(),font.font_identifier(),font.face()),("ASCII","ID",5));
        assert!(!font.seven_bit_safe());
        assert_eq!(font.dimensions(0).unwrap().width.to_f64(),0.5);
    }

    #[test]
    fn oversized_header_strings() {
        let mut b = sample();
        b.header[2] = (40 << 24) | (b.header[2] & 0x00FF_FFFF);
        assert_eq!(err(&b.build()).origin,Check::CodingSchemeTooLong);

        let mut b = sample();
        b.header[12] = (20 << 24) | (b.header[12] & 0x00FF_FFFF);
        assert_eq!(err(&b.build()).origin,Check::FontIdentifierTooLong);
    }

    #[test]
    fn every_unbalanced_count_is_rejected() {
        let good = sample();
        for field in 0..12 {
            for delta in [1i32,-1,5] {
                let bytes = good.build_with(|counts| {
                    counts[field] = (counts[field] as i32 + delta) as u16;
                });
                let d = err(&bytes);
                assert_eq!(d.kind,DiagnosticKind::Format,"field {field} delta {delta}");
            }
        }
    }

    #[test]
    fn structural_checks() {
        let bytes = TfmBuilder::new(1,0).build_with(|c| c[0] = 5);
        assert_eq!(err(&bytes).origin,Check::FileLengthTooSmall);

        let mut bytes = TfmBuilder::new(1,0).build();
        bytes.extend([0;4]);
        assert_eq!(err(&bytes).origin,Check::FileSizeMismatch);

        let bytes = TfmBuilder::new(1,0).build_with(|c| c[3] = 256);
        assert_eq!(err(&bytes).origin,Check::BadCharacterRange);

        let bytes = TfmBuilder::new(1,0).build_with(|c| { c[2] = 10; c[3] = 5; });
        assert_eq!(err(&bytes).origin,Check::BadCharacterRange);

        let bytes = TfmBuilder::new(1,0).undecoded(0,0,0,0).build_with(|c| c[10] = 257);
        assert_eq!(err(&bytes).origin,Check::TooManyExtensibleCharacters);

        let bytes = TfmBuilder::new(1,0).build_with(|c| c[4] = 1);
        assert_eq!(err(&bytes).origin,Check::InconsistentSubFileSizes);
    }

    #[test]
    fn boundary_ranges_are_accepted() {
        let font = FontMetrics::from_bytes(&TfmBuilder::new(256,255).build()).unwrap();
        assert_eq!(font.char_count(),0);
        let mut b = TfmBuilder::new(0,255);
        for c in 0..=255u8 { b = b.char_info(c,[1,0,0,c]); }
        let font = FontMetrics::from_bytes(&b.widths(&[0,1]).undecoded(0,0,256,0).build()).unwrap();
        assert_eq!(font.char_count(),256);
        assert_eq!(font.char_info(255).unwrap().remainder,255);
        assert_eq!(font.table_sizes().extensible,256);
    }

    /// Claims the size of the whole file but only holds a prefix of it.
    struct Truncated {
        inner:crate::reader::ByteReader<Vec<u8>>,
        claimed:usize
    }
    impl BinaryReader for Truncated {
        fn endian(&self) -> Endian { self.inner.endian() }
        fn set_endian(&mut self,endian:Endian) { self.inner.set_endian(endian) }
        fn size(&self) -> usize { self.claimed }
        fn offset(&self) -> usize { self.inner.offset() }
        fn seek(&mut self,offset:usize) -> Result<(),EndOfStream> { self.inner.seek(offset) }
        fn read_bytes(&mut self,buf:&mut [u8]) -> Result<(),EndOfStream> { self.inner.read_bytes(buf) }
    }

    #[test]
    fn short_read_after_validation_is_internal() {
        let mut bytes = sample().build();
        let claimed = bytes.len();
        bytes.truncate(40);
        let mut stream = Truncated { inner:crate::reader::ByteReader::new(bytes), claimed };
        let d = decode(&mut stream).unwrap_err();
        assert_eq!(d.kind,DiagnosticKind::Internal);
        assert_eq!(d.origin,Check::UnexpectedEndOfStream);
        assert!(d.message.contains("offset 33"),"{}",d.message);
    }

    #[test]
    fn io_failures() {
        let d = FontMetrics::from_file("/nonexistent/definitely/missing.tfm").unwrap_err();
        assert_eq!(d.kind,DiagnosticKind::Io);
        assert_eq!(d.origin,Check::ReadFile);
    }
}
