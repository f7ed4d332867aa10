//! The fixed dog database candidates are drawn from.

use crate::models::{Dog, DogSize, EnergyLevel, Gender, Location};

struct Entry {
    id: &'static str,
    name: &'static str,
    breed: &'static str,
    age: u8,
    gender: Gender,
    size: DogSize,
    energy: EnergyLevel,
    activities: &'static [&'static str],
    bio: &'static str,
    image_url: &'static str,
    location: (f64, f64, &'static str),
    owner: (&'static str, &'static str),
}

impl Entry {
    fn to_dog(&self) -> Dog {
        let (lat, lng, city) = self.location;
        let (owner_id, owner_name) = self.owner;
        Dog {
            id: self.id.to_string(),
            name: self.name.to_string(),
            breed: self.breed.to_string(),
            age: self.age,
            gender: self.gender,
            size: self.size,
            energy: self.energy,
            activities: self.activities.iter().map(|a| a.to_string()).collect(),
            bio: self.bio.to_string(),
            image_url: self.image_url.to_string(),
            location: Location::new(lat, lng, city),
            owner_id: owner_id.to_string(),
            owner_name: owner_name.to_string(),
        }
    }
}

/// Every dog in the catalog, in catalog order.
pub fn all_dogs() -> Vec<Dog> {
    ENTRIES.iter().map(Entry::to_dog).collect()
}

/// Number of dogs in the catalog.
pub fn len() -> usize {
    ENTRIES.len()
}

#[rustfmt::skip]
const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        name: "Max",
        breed: "Golden Retriever",
        age: 3,
        gender: Gender::Male,
        size: DogSize::Large,
        energy: EnergyLevel::High,
        activities: &["Walking", "Fetch", "Swimming", "Dog Parks"],
        bio: "Friendly and energetic! Love meeting new friends at the park.",
        image_url: "https://images.unsplash.com/photo-1633722715463-d30f4f325e24?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner1", "Sarah Johnson"),
    },
    Entry {
        id: "2",
        name: "Bella",
        breed: "Labrador Retriever",
        age: 2,
        gender: Gender::Female,
        size: DogSize::Large,
        energy: EnergyLevel::VeryHigh,
        activities: &["Running", "Hiking", "Swimming", "Fetch"],
        bio: "Always ready for an adventure! Let's explore trails together.",
        image_url: "https://images.unsplash.com/photo-1591769225440-811ad7d6eab3?w=800",
        location: (18.7883, 98.9853, "Chiang Mai"),
        owner: ("owner2", "Michael Chen"),
    },
    Entry {
        id: "3",
        name: "Charlie",
        breed: "French Bulldog",
        age: 1,
        gender: Gender::Male,
        size: DogSize::Small,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Dog Parks", "Training"],
        bio: "Playful pup who loves to snuggle. Great with other dogs!",
        image_url: "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner3", "Emma Davis"),
    },
    Entry {
        id: "4",
        name: "Luna",
        breed: "Border Collie",
        age: 4,
        gender: Gender::Female,
        size: DogSize::Medium,
        energy: EnergyLevel::VeryHigh,
        activities: &["Agility", "Running", "Training", "Fetch"],
        bio: "Smart and athletic! Looking for active playmates.",
        image_url: "https://images.unsplash.com/photo-1568572933382-74d440642117?w=800",
        location: (7.8804, 98.3923, "Phuket"),
        owner: ("owner4", "James Wilson"),
    },
    Entry {
        id: "5",
        name: "Cooper",
        breed: "Australian Shepherd",
        age: 3,
        gender: Gender::Male,
        size: DogSize::Medium,
        energy: EnergyLevel::High,
        activities: &["Hiking", "Running", "Agility", "Beach"],
        bio: "Adventurous and loyal companion. Love outdoor activities!",
        image_url: "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=800",
        location: (13.3611, 100.9847, "Chon Buri"),
        owner: ("owner5", "Olivia Martinez"),
    },
    Entry {
        id: "6",
        name: "Daisy",
        breed: "Beagle",
        age: 5,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Dog Parks", "Fetch"],
        bio: "Sweet and curious! Always following my nose.",
        image_url: "https://images.unsplash.com/photo-1505628346881-b72b27e84530?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner6", "William Brown"),
    },
    Entry {
        id: "7",
        name: "Rocky",
        breed: "German Shepherd",
        age: 4,
        gender: Gender::Male,
        size: DogSize::Large,
        energy: EnergyLevel::High,
        activities: &["Running", "Training", "Hiking", "Agility"],
        bio: "Protective and smart. Love learning new tricks!",
        image_url: "https://images.unsplash.com/photo-1568393691622-c7ba131d63b4?w=800",
        location: (18.7883, 98.9853, "Chiang Mai"),
        owner: ("owner7", "Sophia Anderson"),
    },
    Entry {
        id: "8",
        name: "Molly",
        breed: "Poodle",
        age: 2,
        gender: Gender::Female,
        size: DogSize::Medium,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Training", "Dog Parks"],
        bio: "Elegant and friendly. Enjoy meeting new friends!",
        image_url: "https://images.unsplash.com/photo-1537151608828-ea2b11777ee8?w=800",
        location: (14.0208, 100.5230, "Nonthaburi"),
        owner: ("owner8", "Daniel Lee"),
    },
    Entry {
        id: "9",
        name: "Buddy",
        breed: "Boxer",
        age: 3,
        gender: Gender::Male,
        size: DogSize::Large,
        energy: EnergyLevel::High,
        activities: &["Running", "Fetch", "Dog Parks", "Beach"],
        bio: "Energetic and fun-loving! Always up for playtime.",
        image_url: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner9", "Ava Taylor"),
    },
    Entry {
        id: "10",
        name: "Sadie",
        breed: "Pembroke Welsh Corgi",
        age: 2,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Fetch", "Dog Parks"],
        bio: "Short legs, big personality! Love making new friends.",
        image_url: "https://images.unsplash.com/photo-1546527868-ccb7ee7dfa6a?w=800",
        location: (13.5282, 100.2638, "Samut Sakhon"),
        owner: ("owner10", "Noah White"),
    },
    Entry {
        id: "11",
        name: "Duke",
        breed: "Rottweiler",
        age: 5,
        gender: Gender::Male,
        size: DogSize::Giant,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Training", "Hiking"],
        bio: "Gentle giant with a big heart. Protective but friendly.",
        image_url: "https://images.unsplash.com/photo-1567752881298-894bb81f9379?w=800",
        location: (19.9071, 99.8325, "Chiang Rai"),
        owner: ("owner11", "Isabella Harris"),
    },
    Entry {
        id: "12",
        name: "Rosie",
        breed: "Cavalier King Charles Spaniel",
        age: 1,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Low,
        activities: &["Walking", "Training"],
        bio: "Gentle and affectionate. Perfect cuddle buddy!",
        image_url: "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner12", "Liam Clark"),
    },
    Entry {
        id: "13",
        name: "Zeus",
        breed: "Siberian Husky",
        age: 3,
        gender: Gender::Male,
        size: DogSize::Large,
        energy: EnergyLevel::VeryHigh,
        activities: &["Running", "Hiking", "Swimming", "Agility"],
        bio: "Adventurous spirit! Love exploring and outdoor fun.",
        image_url: "https://images.unsplash.com/photo-1605568427561-40dd23c2acea?w=800",
        location: (7.8804, 98.3923, "Phuket"),
        owner: ("owner13", "Mia Rodriguez"),
    },
    Entry {
        id: "14",
        name: "Coco",
        breed: "Yorkshire Terrier",
        age: 4,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Low,
        activities: &["Walking", "Dog Parks"],
        bio: "Small but mighty! Love being the center of attention.",
        image_url: "https://images.unsplash.com/photo-1516598540642-e8f40a09d939?w=800",
        location: (13.5906, 100.6018, "Samut Prakan"),
        owner: ("owner14", "Ethan Martinez"),
    },
    Entry {
        id: "15",
        name: "Jack",
        breed: "Boston Terrier",
        age: 2,
        gender: Gender::Male,
        size: DogSize::Small,
        energy: EnergyLevel::High,
        activities: &["Fetch", "Dog Parks", "Training"],
        bio: "Playful and intelligent. Always ready for fun!",
        image_url: "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?w=800",
        location: (18.7883, 98.9853, "Chiang Mai"),
        owner: ("owner15", "Charlotte Garcia"),
    },
    Entry {
        id: "16",
        name: "Ruby",
        breed: "Dachshund",
        age: 3,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Fetch", "Dog Parks"],
        bio: "Curious and brave! Love exploring new places.",
        image_url: "https://images.unsplash.com/photo-1612536616623-ef7e5660edbc?w=800",
        location: (14.9930, 102.0977, "Khon Kaen"),
        owner: ("owner16", "Mason Thompson"),
    },
    Entry {
        id: "17",
        name: "Bear",
        breed: "Great Dane",
        age: 4,
        gender: Gender::Male,
        size: DogSize::Giant,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Beach", "Dog Parks"],
        bio: "Big softie who loves everyone. Gentle with all dogs!",
        image_url: "https://images.unsplash.com/photo-1567529692333-de9fd6772897?w=800",
        location: (9.1382, 99.3336, "Surat Thani"),
        owner: ("owner17", "Amelia Wilson"),
    },
    Entry {
        id: "18",
        name: "Penny",
        breed: "Shih Tzu",
        age: 5,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Low,
        activities: &["Walking", "Training"],
        bio: "Sweet and calm. Looking for gentle playmates.",
        image_url: "https://images.unsplash.com/photo-1612774412231-1c4b5c3c836b?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner18", "Lucas Moore"),
    },
    Entry {
        id: "19",
        name: "Oliver",
        breed: "Miniature Schnauzer",
        age: 2,
        gender: Gender::Male,
        size: DogSize::Small,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Training", "Dog Parks", "Fetch"],
        bio: "Alert and friendly! Love playing with other small dogs.",
        image_url: "https://images.unsplash.com/photo-1596492784531-6e6eb5ea9993?w=800",
        location: (14.3532, 100.5699, "Pathum Thani"),
        owner: ("owner19", "Harper Jackson"),
    },
    Entry {
        id: "20",
        name: "Zoey",
        breed: "Mixed Breed",
        age: 3,
        gender: Gender::Female,
        size: DogSize::Medium,
        energy: EnergyLevel::High,
        activities: &["Running", "Hiking", "Dog Parks", "Swimming"],
        bio: "Unique and lovable! Best of many breeds in one.",
        image_url: "https://images.unsplash.com/photo-1561037404-61cd46aa615b?w=800",
        location: (13.3611, 100.9847, "Chon Buri"),
        owner: ("owner20", "Benjamin Davis"),
    },
    Entry {
        id: "21",
        name: "Milo",
        breed: "Pomeranian",
        age: 2,
        gender: Gender::Male,
        size: DogSize::Small,
        energy: EnergyLevel::High,
        activities: &["Walking", "Dog Parks", "Training", "Fetch"],
        bio: "Fluffy ball of energy! Love to play and show off tricks.",
        image_url: "https://images.unsplash.com/photo-1535268647677-300dbf3d78d1?w=800",
        location: (13.7563, 100.5018, "Bangkok"),
        owner: ("owner21", "Evelyn Martinez"),
    },
    Entry {
        id: "22",
        name: "Lola",
        breed: "Doberman Pinscher",
        age: 4,
        gender: Gender::Female,
        size: DogSize::Large,
        energy: EnergyLevel::High,
        activities: &["Running", "Training", "Agility", "Hiking"],
        bio: "Athletic and loyal. Looking for active companions!",
        image_url: "https://images.unsplash.com/photo-1590486803833-1c5dc8ddd4c8?w=800",
        location: (18.2932, 99.4902, "Lamphun"),
        owner: ("owner22", "Sebastian Lee"),
    },
    Entry {
        id: "23",
        name: "Teddy",
        breed: "Bulldog",
        age: 5,
        gender: Gender::Male,
        size: DogSize::Medium,
        energy: EnergyLevel::Low,
        activities: &["Walking", "Dog Parks"],
        bio: "Laid-back and lovable. Prefer short walks and lots of naps.",
        image_url: "https://images.unsplash.com/photo-1583511655826-05700d52f4d9?w=800",
        location: (7.0055, 100.4737, "Songkhla"),
        owner: ("owner23", "Victoria Chen"),
    },
    Entry {
        id: "24",
        name: "Nala",
        breed: "German Shorthaired Pointer",
        age: 3,
        gender: Gender::Female,
        size: DogSize::Large,
        energy: EnergyLevel::VeryHigh,
        activities: &["Running", "Hiking", "Swimming", "Fetch", "Camping"],
        bio: "Born to run! Need active friends who love adventures.",
        image_url: "https://images.unsplash.com/photo-1576201836106-db1758fd1c97?w=800",
        location: (12.6111, 99.9576, "Prachuap Khiri Khan"),
        owner: ("owner24", "Jackson White"),
    },
    Entry {
        id: "25",
        name: "Finn",
        breed: "Mixed Breed",
        age: 1,
        gender: Gender::Male,
        size: DogSize::Medium,
        energy: EnergyLevel::High,
        activities: &["Fetch", "Dog Parks", "Running", "Beach"],
        bio: "Young and playful! Still learning but love making friends.",
        image_url: "https://images.unsplash.com/photo-1587764379873-97837921fd44?w=800",
        location: (12.9236, 100.8825, "Rayong"),
        owner: ("owner25", "Scarlett Brown"),
    },
    Entry {
        id: "26",
        name: "Sophie",
        breed: "Cocker Spaniel",
        age: 4,
        gender: Gender::Female,
        size: DogSize::Medium,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Swimming", "Fetch", "Dog Parks"],
        bio: "Sweet and gentle soul. Love water and cuddles!",
        image_url: "https://images.unsplash.com/photo-1586671267731-da2cf3ceeb80?w=800",
        location: (15.2286, 104.8517, "Ubon Ratchathani"),
        owner: ("owner26", "Henry Garcia"),
    },
    Entry {
        id: "27",
        name: "Thor",
        breed: "Boxer",
        age: 2,
        gender: Gender::Male,
        size: DogSize::Large,
        energy: EnergyLevel::VeryHigh,
        activities: &["Running", "Fetch", "Dog Parks", "Agility", "Training"],
        bio: "Strong and energetic! Always ready for action.",
        image_url: "https://images.unsplash.com/photo-1568572933382-74d440642117?w=800",
        location: (14.8818, 100.9133, "Saraburi"),
        owner: ("owner27", "Grace Wilson"),
    },
    Entry {
        id: "28",
        name: "Lily",
        breed: "Maltese",
        age: 3,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Low,
        activities: &["Walking", "Training"],
        bio: "Delicate and affectionate. Perfect lap dog companion!",
        image_url: "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?w=800",
        location: (8.0863, 98.9063, "Krabi"),
        owner: ("owner28", "Matthew Taylor"),
    },
    Entry {
        id: "29",
        name: "Ace",
        breed: "Weimaraner",
        age: 3,
        gender: Gender::Male,
        size: DogSize::Large,
        energy: EnergyLevel::VeryHigh,
        activities: &["Running", "Hiking", "Fetch", "Camping", "Beach"],
        bio: "Sleek and athletic! Love long runs and outdoor fun.",
        image_url: "https://images.unsplash.com/photo-1600804931749-2da4ce26c869?w=800",
        location: (15.8700, 100.9925, "Nakhon Sawan"),
        owner: ("owner29", "Chloe Martinez"),
    },
    Entry {
        id: "30",
        name: "Pepper",
        breed: "Border Terrier",
        age: 4,
        gender: Gender::Female,
        size: DogSize::Small,
        energy: EnergyLevel::Moderate,
        activities: &["Walking", "Fetch", "Dog Parks", "Training"],
        bio: "Spunky and smart! Love learning new tricks.",
        image_url: "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e?w=800",
        location: (17.4138, 102.7875, "Udon Thani"),
        owner: ("owner30", "Alexander Harris"),
    },
];
