//! Output document assembly
//!
//! The page tree root is allocated up front so every page can point at
//! its parent as soon as it is added. Nothing is written to the catalog
//! until `finish`.

use crate::constants::{IMAGE_RESOURCE_PREFIX, PDF_VERSION, PRODUCER};
use crate::geometry::Placement;
use crate::jpeg::{ColorSpace, JpegImage};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

pub(crate) struct PdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    pages: Vec<ObjectId>,
    title: String,
}

impl PdfBuilder {
    pub(crate) fn new(title: &str) -> Self {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            pages: Vec::new(),
            title: title.to_string(),
        }
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Embed `image` and add a page of `page` size that draws it at `placement`
    pub(crate) fn add_jpeg_page(&mut self, image: JpegImage, page: PageSize, placement: &Placement) {
        let image_id = self.doc.add_object(image_xobject(image));
        let resource_name = format!("{}{}", IMAGE_RESOURCE_PREFIX, self.pages.len() + 1);

        let content = format!(
            "q\n{} 0 0 {} {} {} cm\n/{} Do\nQ\n",
            placement.width, placement.height, placement.x, placement.y, resource_name
        );
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut xobjects = Dictionary::new();
        xobjects.set(resource_name.as_bytes(), Object::Reference(image_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.width),
                    Object::Real(page.height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        self.pages.push(page_id);
    }

    /// Close the page tree and serialize the document
    pub(crate) fn finish(mut self) -> Result<Vec<u8>> {
        let kids = self
            .pages
            .iter()
            .map(|id| Object::Reference(*id))
            .collect::<Vec<_>>();
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(self.pages.len() as i64)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        let info_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Title", lopdf::text_string(&self.title)),
            ("Producer", Object::string_literal(PRODUCER)),
            ("CreationDate", Object::string_literal(pdf_date_now())),
        ]));
        self.doc.trailer.set("Info", info_id);

        let mut writer = Vec::new();
        self.doc.save_to(&mut writer)?;
        Ok(writer)
    }
}

/// Image XObject carrying the JPEG bytes untouched under DCTDecode
fn image_xobject(image: JpegImage) -> Stream {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width() as i64));
    dict.set("Height", Object::Integer(image.height() as i64));
    dict.set(
        "ColorSpace",
        Object::Name(image.color_space().pdf_name().as_bytes().to_vec()),
    );
    dict.set(
        "BitsPerComponent",
        Object::Integer(image.bits_per_component() as i64),
    );
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Adobe CMYK JPEGs store inverted samples
    if image.color_space() == ColorSpace::DeviceCmyk {
        let decode = (0..ColorSpace::DeviceCmyk.components())
            .flat_map(|_| [Object::Integer(1), Object::Integer(0)])
            .collect();
        dict.set("Decode", Object::Array(decode));
    }

    Stream::new(dict, image.into_data())
}

/// Current local time in PDF date format, e.g. `D:20240131120000+01'00'`
fn pdf_date_now() -> String {
    let now = chrono::Local::now();
    let offset = now.format("%z").to_string();
    let (hours, minutes) = offset.split_at(offset.len().saturating_sub(2));
    format!("D:{}{}'{}'", now.format("%Y%m%d%H%M%S"), hours, minutes)
}
