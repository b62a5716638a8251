mod product_dto;

pub use product_dto::{
    CreateProductDto, ListProductsQuery, ProductResponseDto, ReviewInputDto, UpdateProductDto,
};
