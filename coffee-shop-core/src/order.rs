use std::fmt::Display;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeType {
    Hot,
    Ice,
}

impl CoffeeType {
    pub const ALL: [CoffeeType; 2] = [CoffeeType::Hot, CoffeeType::Ice];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoffeeType::Hot => "Hot",
            CoffeeType::Ice => "Ice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeSize {
    Regular,
    Medium,
    Large,
}

impl CoffeeSize {
    pub const ALL: [CoffeeSize; 3] = [CoffeeSize::Regular, CoffeeSize::Medium, CoffeeSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoffeeSize::Regular => "Regular",
            CoffeeSize::Medium => "Medium",
            CoffeeSize::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeFlavor {
    Americano,
    Latte,
    Cappuccino,
    Espresso,
    Black,
    Doppio,
    Cortado,
    RedEye,
}

impl CoffeeFlavor {
    pub const ALL: [CoffeeFlavor; 8] = [
        CoffeeFlavor::Americano,
        CoffeeFlavor::Latte,
        CoffeeFlavor::Cappuccino,
        CoffeeFlavor::Espresso,
        CoffeeFlavor::Black,
        CoffeeFlavor::Doppio,
        CoffeeFlavor::Cortado,
        CoffeeFlavor::RedEye,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoffeeFlavor::Americano => "Americano",
            CoffeeFlavor::Latte => "Latte",
            CoffeeFlavor::Cappuccino => "Cappuccino",
            CoffeeFlavor::Espresso => "Espresso",
            CoffeeFlavor::Black => "Black",
            CoffeeFlavor::Doppio => "Doppio",
            CoffeeFlavor::Cortado => "Cortado",
            CoffeeFlavor::RedEye => "Red Eye",
        }
    }
}

impl Display for CoffeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for CoffeeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for CoffeeFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single order. Its only identity is its position in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoffeeOrder {
    pub kind: CoffeeType,
    pub size: CoffeeSize,
    pub flavor: CoffeeFlavor,
}

impl Display for CoffeeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} {} {}}}", self.kind, self.size, self.flavor)
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(vocabulary: &[T], rng: &mut R) -> T {
    vocabulary[rng.gen_range(0..vocabulary.len())]
}

/// Generate `count` orders with every field drawn independently and uniformly.
///
/// A negative count yields an empty batch.
pub fn random_orders<R: Rng + ?Sized>(count: i64, rng: &mut R) -> Vec<CoffeeOrder> {
    let count = usize::try_from(count).unwrap_or(0);
    (0..count)
        .map(|_| CoffeeOrder {
            kind: pick(&CoffeeType::ALL, rng),
            size: pick(&CoffeeSize::ALL, rng),
            flavor: pick(&CoffeeFlavor::ALL, rng),
        })
        .collect()
}
