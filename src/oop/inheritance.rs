//! Sharing behaviour without class inheritance.
//!
//! Common state lives in an embedded struct, common behaviour in traits with
//! default methods. Where two "parents" disagree (the diamond case), the
//! combining type picks an answer explicitly by delegating to one of them.
//!
//! Run with: cargo run --bin oop_inheritance

use std::io::{self, Write};

use crate::console::{banner, section};

// =============================================================================
// Base state and the Animal capability set
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AnimalInfo {
    pub name: String,
    pub age: u32,
}

impl AnimalInfo {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

pub trait Animal {
    fn info(&self) -> &AnimalInfo;

    /// How the animal gets around. Every animal must say.
    fn locomotion(&self) -> String;

    fn make_sound(&self) -> String {
        format!("{} makes a generic animal sound", self.info().name)
    }

    fn name(&self) -> &str {
        &self.info().name
    }

    fn age(&self) -> u32 {
        self.info().age
    }
}

/// Behaviour that is the same for every animal and cannot be replaced.
pub trait AnimalExt: Animal {
    fn eat(&self) -> String {
        format!("{} is eating", self.name())
    }
}

impl<A: Animal + ?Sized> AnimalExt for A {}

pub trait Flyable {
    fn fly(&self) -> String;
}

// =============================================================================
// Concrete animals
// =============================================================================

#[derive(Debug, Clone)]
pub struct Dog {
    info: AnimalInfo,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            info: AnimalInfo::new(name, age),
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn fetch(&self) -> String {
        format!("{} fetches the ball", self.info.name)
    }
}

impl Animal for Dog {
    fn info(&self) -> &AnimalInfo {
        &self.info
    }

    fn locomotion(&self) -> String {
        format!("{} runs on four legs", self.info.name)
    }

    fn make_sound(&self) -> String {
        format!("{} barks: Woof! Woof!", self.info.name)
    }
}

#[derive(Debug, Clone)]
pub struct Cat {
    info: AnimalInfo,
    indoor: bool,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: u32, indoor: bool) -> Self {
        Self {
            info: AnimalInfo::new(name, age),
            indoor,
        }
    }

    pub fn is_indoor(&self) -> bool {
        self.indoor
    }

    pub fn climb(&self) -> String {
        format!("{} climbs the tree", self.info.name)
    }
}

impl Animal for Cat {
    fn info(&self) -> &AnimalInfo {
        &self.info
    }

    fn locomotion(&self) -> String {
        format!("{} walks silently", self.info.name)
    }

    fn make_sound(&self) -> String {
        format!("{} meows: Meow! Meow!", self.info.name)
    }
}

/// An animal that also has the [`Flyable`] capability.
#[derive(Debug, Clone)]
pub struct Bird {
    info: AnimalInfo,
    wingspan_cm: f64,
}

impl Bird {
    pub fn new(name: impl Into<String>, age: u32, wingspan_cm: f64) -> Self {
        Self {
            info: AnimalInfo::new(name, age),
            wingspan_cm,
        }
    }

    pub fn wingspan_cm(&self) -> f64 {
        self.wingspan_cm
    }
}

impl Animal for Bird {
    fn info(&self) -> &AnimalInfo {
        &self.info
    }

    fn locomotion(&self) -> String {
        format!("{} flies through the air", self.info.name)
    }

    fn make_sound(&self) -> String {
        format!("{} chirps: Tweet! Tweet!", self.info.name)
    }
}

impl Flyable for Bird {
    fn fly(&self) -> String {
        format!("{} soars with {}cm wingspan", self.info.name, self.wingspan_cm)
    }
}

// =============================================================================
// The diamond, as composition
// =============================================================================

pub trait Breathing {
    fn breathe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LivingThing {
    species: String,
}

impl LivingThing {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

impl Breathing for LivingThing {
    fn breathe(&self) -> String {
        format!("{} breathes", self.species)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mammal {
    living: LivingThing,
}

impl Mammal {
    pub fn new(living: LivingThing) -> Self {
        Self { living }
    }
}

impl Breathing for Mammal {
    fn breathe(&self) -> String {
        format!("{} breathes with lungs", self.living.species())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WingedAnimal {
    living: LivingThing,
}

impl WingedAnimal {
    pub fn new(living: LivingThing) -> Self {
        Self { living }
    }
}

impl Breathing for WingedAnimal {
    fn breathe(&self) -> String {
        format!("{} breathes efficiently for flight", self.living.species())
    }
}

/// Both a mammal and a winged animal. The two parts share one
/// [`LivingThing`] value, so there is a single species.
#[derive(Debug, Clone, PartialEq)]
pub struct Bat {
    mammal: Mammal,
    wings: WingedAnimal,
}

impl Bat {
    pub fn new() -> Self {
        let living = LivingThing::new("Bat");
        Self {
            mammal: Mammal::new(living.clone()),
            wings: WingedAnimal::new(living),
        }
    }

    pub fn species(&self) -> &str {
        self.mammal.living.species()
    }

    pub fn breathe_as_mammal(&self) -> String {
        self.mammal.breathe()
    }

    pub fn breathe_as_winged(&self) -> String {
        self.wings.breathe()
    }
}

impl Default for Bat {
    fn default() -> Self {
        Self::new()
    }
}

impl Breathing for Bat {
    fn breathe(&self) -> String {
        format!("{} breathes with lungs optimized for flight", self.species())
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Inheritance via Traits and Composition")?;

    section(out, 1, "Implementing a trait")?;
    let dog = Dog::new("Buddy", 3, "Golden Retriever");
    writeln!(out, "  {}", dog.make_sound())?;
    writeln!(out, "  {}", dog.locomotion())?;
    writeln!(out, "  {}", dog.eat())?;
    writeln!(out, "  {}", dog.fetch())?;
    writeln!(out, "   Breed: {}", dog.breed())?;
    writeln!(out)?;

    section(out, 2, "Another implementation")?;
    let cat = Cat::new("Whiskers", 2, true);
    writeln!(out, "  {}", cat.make_sound())?;
    writeln!(out, "  {}", cat.locomotion())?;
    writeln!(out, "  {}", cat.eat())?;
    writeln!(out, "  {}", cat.climb())?;
    writeln!(out, "   Indoor cat: {}", crate::console::yes_no(cat.is_indoor()))?;
    writeln!(out)?;

    section(out, 3, "Several traits on one type")?;
    let bird = Bird::new("Tweety", 1, 25.5);
    writeln!(out, "  {}", bird.make_sound())?;
    writeln!(out, "  {}", bird.locomotion())?;
    writeln!(out, "  {}", bird.fly())?;
    writeln!(out, "  {}", bird.eat())?;
    writeln!(out, "   Wingspan: {}cm", bird.wingspan_cm())?;
    writeln!(out)?;

    section(out, 4, "Trait objects")?;
    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog::new("Max", 4, "German Shepherd")),
        Box::new(Cat::new("Luna", 3, false)),
        Box::new(Bird::new("Eagle", 2, 180.0)),
    ];
    for animal in &animals {
        writeln!(out, "   {} (age {}):", animal.name(), animal.age())?;
        writeln!(out, "  {}", animal.make_sound())?;
        writeln!(out, "  {}", animal.locomotion())?;
        writeln!(out, "  {}", animal.eat())?;
        writeln!(out)?;
    }

    section(out, 5, "Diamond resolved by delegation")?;
    let bat = Bat::new();
    writeln!(out, "  {}", bat.breathe())?;
    writeln!(out, "  as mammal: {}", bat.breathe_as_mammal())?;
    writeln!(out, "  as winged animal: {}", bat.breathe_as_winged())?;
    writeln!(out)?;

    section(out, 6, "Trait object references")?;
    let another_dog = Dog::new("Rex", 5, "Labrador");
    let another_cat = Cat::new("Mittens", 4, true);
    let refs: [&dyn Animal; 2] = [&another_dog, &another_cat];
    for animal in refs {
        writeln!(out, "  {}", animal.make_sound())?;
    }
    writeln!(out)?;

    banner(out, "End of Inheritance Example")
}
