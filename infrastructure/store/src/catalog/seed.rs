use business::domain::catalog::model::{Bouquet, Flower};

const CDN_BASE: &str =
    "https://cdn.poehali.dev/projects/20e9b2da-3dd2-44fd-ab1b-8035bfe9ef49/files";

/// The showcase stems. Prices are per stem, in rubles.
pub fn flowers() -> Vec<Flower> {
    vec![
        Flower {
            id: 1,
            name: "Роза красная".to_string(),
            price: 150,
            image: format!("{}/eb0145a3-73e5-41dc-bae7-50dc004598f9.jpg", CDN_BASE),
            available: 50,
        },
        Flower {
            id: 2,
            name: "Ромашка".to_string(),
            price: 100,
            image: format!("{}/0c497cad-0495-495d-af06-594a0f1ffb5d.jpg", CDN_BASE),
            available: 30,
        },
        Flower {
            id: 3,
            name: "Тюльпан желтый".to_string(),
            price: 120,
            image: format!("{}/a7fae14a-abcb-4ac7-8f40-26316f1944ca.jpg", CDN_BASE),
            available: 40,
        },
        Flower {
            id: 4,
            name: "Лилия".to_string(),
            price: 200,
            image: format!("{}/9c868a7b-47e6-4874-98d4-daa675f1f6bf.jpg", CDN_BASE),
            available: 25,
        },
    ]
}

/// The pre-assembled bouquets of the showcase.
pub fn bouquets() -> Vec<Bouquet> {
    vec![
        Bouquet {
            id: 1,
            name: "Нежность".to_string(),
            description: "Розовые розы с зеленью".to_string(),
            price: 2500,
            image: format!("{}/8f79cff6-adab-460c-af6a-c960614d00b1.jpg", CDN_BASE),
        },
        Bouquet {
            id: 2,
            name: "Прованс".to_string(),
            description: "Лаванда с белыми цветами".to_string(),
            price: 1800,
            image: format!("{}/dd3f26e5-31f3-44e5-8fc3-fbef297b0915.jpg", CDN_BASE),
        },
        Bouquet {
            id: 3,
            name: "Весенний микс".to_string(),
            description: "Тюльпаны и розы".to_string(),
            price: 3200,
            image: format!("{}/cfd6b18b-72a0-46fc-9c55-3e4c1fb6551b.jpg", CDN_BASE),
        },
    ]
}
