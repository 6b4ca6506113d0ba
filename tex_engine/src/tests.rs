#[doc(hidden)]
#[cfg(any(test,doctest))]
#[allow(dead_code)]
pub mod test_utils {
    use tex_tfm::testing::TfmBuilder;

    #[macro_export]
    macro_rules! measure {
        ($key:ident:$x:expr) => {{
            let measure_start = std::time::Instant::now();
            let ret = $x;
            log::warn!(target:stringify!($key),"Finished after {:?}",measure_start.elapsed());
            ret
        }};
    }

    #[allow(unused_must_use)]
    pub fn trace() {
        env_logger::builder().filter_level(log::LevelFilter::Trace).try_init();
    }
    #[allow(unused_must_use)]
    pub fn debug() {
        env_logger::builder().filter_level(log::LevelFilter::Debug).try_init();
    }
    #[allow(unused_must_use)]
    pub fn info() {
        env_logger::builder().filter_level(log::LevelFilter::Info).try_init();
    }
    #[allow(unused_must_use)]
    pub fn warn() {
        env_logger::builder().filter_level(log::LevelFilter::Warn).try_init();
    }
    #[allow(unused_must_use)]
    pub fn error() {
        env_logger::builder().filter_level(log::LevelFilter::Error).try_init();
    }

    /// A font covering `A`..=`C` with design size `design_pt`; `A` is half an em wide.
    pub fn metric_file(design_pt:i32,id:&str) -> Vec<u8> {
        TfmBuilder::new(65,67)
            .standard_header(0x1234_5678,design_pt << 20,"TeX text",id,true,0)
            .char_info(65,[1,0x11,0,0])
            .char_info(67,[2,0x00,0x04,0])
            .widths(&[0,1 << 19,1 << 20])
            .heights(&[0,(7 << 20) / 10])
            .depths(&[0,-(1 << 16)])
            .italics(&[0,1 << 14])
            .undecoded(2,1,0,7)
            .build()
    }
}


#[cfg(test)]
mod tests {
    use crate::tests::test_utils::*;
    use crate::prelude::*;
    use crate::measure;
    use crate::engine::state::{END_PAYLOAD, PAR_PAYLOAD};
    use tex_tfm::{Check, DiagnosticKind, FixWord};

    fn cm_source() -> VirtualFontSource {
        VirtualFontSource::new()
            .with("cmr10",metric_file(10,"CMR"))
            .with("cmti10",metric_file(10,"CMTI"))
            .with("cmbx10",metric_file(10,"CMBX"))
            .with("cmtt10",metric_file(10,"CMTT"))
    }

    #[test]
    fn boot() { measure!(boot: {
        debug();
        let kernel = Kernel::<()>::new(&KernelConfig::default(),&mut cm_source()).unwrap();
        assert_eq!(kernel.fonts.len(),5);
        assert_eq!(kernel.fonts.font(0).unwrap().name,"nullfont");
        for (index,name) in ["rm","it","bf","tt"].iter().enumerate() {
            let cs = kernel.commands.get(name).unwrap();
            assert_eq!(cs.code,CategoryCode::SetFont);
            assert_eq!(cs.payload.as_usize(),index + 1);
        }
        assert_eq!(kernel.fonts.get(3).unwrap().font_identifier(),"CMBX");
        assert_eq!(kernel.current_font_index(),1);
        assert_eq!(kernel.current_font().name,"rm");
        assert_eq!(kernel.current_font().size(),Scaled::from_pt(10));
        let par = kernel.commands.get("par").unwrap();
        assert_eq!((par.code,par.payload),(CategoryCode::ParEnd,PAR_PAYLOAD));
        let end = kernel.commands.get("end").unwrap();
        assert_eq!((end.code,end.payload),(CategoryCode::Stop,END_PAYLOAD));
        assert_eq!(kernel.commands.entries(),6);
        assert_eq!(kernel.commands.capacity(),4098);
        assert_eq!(kernel.render.mode(),TeXMode::Vertical);
        assert!(kernel.render.empty());
        assert_eq!(kernel.catcodes.classify('\\'),CategoryCode::Escape);
        assert_eq!(kernel.catcodes.classify(200u32),CategoryCode::Invalid);
    });}

    #[test]
    fn bare_kernel() {
        let kernel = Kernel::<u8>::new(&KernelConfig::bare().with_cs_table_size(0),&mut VirtualFontSource::new()).unwrap();
        assert_eq!(kernel.fonts.len(),1);
        assert_eq!(kernel.current_font_index(),0);
        assert_eq!(kernel.current_font().name,"nullfont");
        assert_eq!(kernel.commands.capacity(),1);
        assert_eq!(kernel.commands.entries(),2);
    }

    #[test]
    fn font_dimensions() {
        let mut kernel = Kernel::<()>::new(&KernelConfig::bare(),&mut VirtualFontSource::new()).unwrap();
        let mut source = VirtualFontSource::new().with("demo",metric_file(12,"DEMO"));
        let idx = kernel.load_font(&mut source,"demo","demo",-500).unwrap();
        assert_eq!(idx,1);
        let font = kernel.fonts.font(idx).unwrap();
        assert_eq!(font.size(),Scaled::from_pt(6));
        let metrics = &font.metrics;
        assert!(metrics.seven_bit_safe());
        assert_eq!(metrics.checksum(),0x1234_5678);
        let a = metrics.dimensions(b'A').unwrap();
        assert_eq!(a.width,FixWord::from_raw(1 << 19));
        assert_eq!(font.size().scale(a.width),Scaled::from_pt(3));
        assert_eq!(a.depth,FixWord::from_raw(-(1 << 16)));
        assert!(metrics.dimensions(b'B').is_none());
        let c = metrics.dimensions(b'C').unwrap();
        assert_eq!(c.width,FixWord::UNITY);
        assert_eq!(c.italic_correction,FixWord::from_raw(1 << 14));
        assert!(metrics.dimensions(b'D').is_none());
        let sizes = metrics.table_sizes();
        assert_eq!((sizes.lig_kern,sizes.kern,sizes.extensible,sizes.params),(2,1,0,7));
    }

    #[test]
    fn failed_loads() {
        error();
        let err = Kernel::<()>::new(&KernelConfig::default(),&mut VirtualFontSource::new()).unwrap_err();
        match err {
            KernelError::FontLoad { file, name, source } => {
                assert_eq!((file.as_str(),name.as_str()),("cmr10","rm"));
                assert_eq!(source.kind,DiagnosticKind::Io);
            }
            other => panic!("unexpected {:?}",other)
        }

        let mut kernel = Kernel::<()>::new(&KernelConfig::bare(),&mut VirtualFontSource::new()).unwrap();
        let mut bytes = metric_file(10,"X");
        bytes.push(0);
        let mut source = VirtualFontSource::new().with("x",bytes);
        match kernel.load_font(&mut source,"x","x",0) {
            Err(KernelError::FontLoad { source, .. }) => assert_eq!(source.origin,Check::FileSizeMismatch),
            other => panic!("unexpected {:?}",other)
        }
        assert_eq!(kernel.fonts.len(),1);
        assert!(kernel.commands.get("x").is_none());
    }

    #[test]
    fn selecting_fonts() {
        let mut kernel = Kernel::<()>::new(&KernelConfig::default(),&mut cm_source()).unwrap();
        kernel.select_font(4).unwrap();
        assert_eq!(kernel.current_font().name,"tt");
        assert_eq!(kernel.select_font(5),Err(KernelError::FontIndex { index:5, len:5 }));
        assert_eq!(kernel.current_font_index(),4);
        kernel.select_font(0).unwrap();
        assert_eq!(kernel.current_font().metrics.char_count(),0);
    }

    #[test]
    fn redefining_a_font_name() {
        let mut kernel = Kernel::<()>::new(&KernelConfig::default(),&mut cm_source()).unwrap();
        let before = kernel.commands.entries();
        let idx = kernel.load_font(&mut cm_source(),"cmbx10","rm",Scaled::from_pt(12).0).unwrap();
        assert_eq!(idx,5);
        assert_eq!(kernel.commands.entries(),before);
        assert_eq!(kernel.commands.get("rm").unwrap().payload,Word(5));
        assert!(std::rc::Rc::ptr_eq(&kernel.fonts.font(3).unwrap().metrics,&kernel.fonts.font(5).unwrap().metrics));
        kernel.primitive("rm",CategoryCode::Other,7i32);
        assert_eq!(kernel.commands.get("rm").unwrap().code,CategoryCode::Other);
        assert_eq!(kernel.commands.entries(),before);
    }

    #[test]
    fn building_a_paragraph() {
        trace();
        #[derive(Debug,PartialEq)]
        enum Node { Char(u8), HList(Option<NodeId>) }

        let mut kernel = Kernel::<Node>::new(&KernelConfig::bare(),&mut VirtualFontSource::new()).unwrap();
        let rs = &mut kernel.render;
        rs.push();
        rs.clear();
        rs.set_mode(TeXMode::Horizontal);
        for c in b"abc" {
            let n = rs.alloc(Node::Char(*c));
            rs.append(n);
        }
        let par = rs.pop().unwrap();
        rs.set_mode(TeXMode::Vertical);
        rs.set_prev_graf(1);
        let hlist = rs.alloc(Node::HList(par.head));
        rs.append(hlist);
        assert_eq!(rs.depth(),0);
        assert_eq!(rs.head(),Some(hlist));
        let text:Vec<u8> = rs.list(par.head).filter_map(|(_,n)| match n {
            Node::Char(c) => Some(*c),
            _ => None
        }).collect();
        assert_eq!(text,b"abc".to_vec());
        assert_eq!(rs.pop(),None);
        assert_eq!(rs.head(),Some(hlist));
    }
}
