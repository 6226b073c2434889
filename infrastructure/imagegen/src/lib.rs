mod bouquet_preview;

pub use bouquet_preview::BouquetPreviewStub;
