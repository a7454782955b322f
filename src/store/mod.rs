pub use albums::AlbumRepository;

mod albums;
