use serde::Serialize;

use crate::{
    entities::Coordinates,
    error::{not_found_error, Error},
};

/// An entry of the visitor-facing animal directory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Animal {
    pub name: &'static str,
    /// Enclosure location.
    pub coordinates: Coordinates,
    pub image: &'static str,
}

const fn animal(name: &'static str, lng: f64, lat: f64, image: &'static str) -> Animal {
    Animal {
        name,
        coordinates: Coordinates::new(lng, lat),
        image,
    }
}

/// Enclosures in directory order. A species kept in two enclosures appears
/// twice under the same name.
pub const DIRECTORY: &[Animal] = &[
    animal(
        "Eléphant",
        -6.897321513447501,
        33.9514314683992,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Eléphant-d_afrique-1-600x600.jpg",
    ),
    animal(
        "Giraphe",
        -6.898077978828276,
        33.952131597882044,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Girafe.jpg",
    ),
    animal(
        "Lion de latlas",
        -6.898606567332478,
        33.953035292528739,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/DSC_1061-600x600.jpg",
    ),
    animal(
        "Lémur catta",
        -6.897991953620861,
        33.953272592676448,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Lémur_catta.jpg",
    ),
    animal(
        "Zébre",
        -6.897971888247699,
        33.952765866133575,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Zèbre-de-grant-600x600.jpg",
    ),
    animal(
        "Rhinocéros",
        -6.897507687029755,
        33.953944454265759,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Rhinocéros-1-600x600.jpg",
    ),
    animal(
        "Watussi",
        -6.897147055422114,
        33.95255460615352,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Watussi.jpg",
    ),
    animal(
        "Babouin",
        -6.896043436352688,
        33.953558594299601,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Babouin.jpg",
    ),
    animal(
        "Addax",
        -6.895924026690253,
        33.954836736342429,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Addax-600x600.jpg",
    ),
    animal(
        "Oryx algazelle",
        -6.897175198544271,
        33.954214630013517,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Oryx_algazelle.jpg",
    ),
    animal(
        "Buffle",
        -6.894992462111438,
        33.951739648584152,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Buffle.jpg",
    ),
    animal(
        "Autruche à coup rouge",
        -6.896920462811277,
        33.953262910202099,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Autruche%20Africaine.jpg",
    ),
    animal(
        "Lion Blanc",
        -6.896897352745306,
        33.954553885620278,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Lion_Blanc.jpg",
    ),
    animal(
        "Gazelle thomson",
        -6.896949683459092,
        33.952909793044952,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/gazelle-m-600x600.png",
    ),
    animal(
        "Flamant rose",
        -6.894221152882348,
        33.953258001835771,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Flamant-Rose-600x600.jpg",
    ),
    animal(
        "Singe magot",
        -6.895334270949593,
        33.954872061753925,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Singe-Magot-1-600x600.jpg",
    ),
    animal(
        "émeus",
        -6.894080343620834,
        33.954566874881252,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/émeus.jpg",
    ),
    animal(
        "Poule geante",
        -6.894001409414533,
        33.954090740753976,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Poule_geante.jpg",
    ),
    animal(
        "Paon",
        -6.893802182784119,
        33.954344053630699,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Paon.jpg",
    ),
    animal(
        "Poney",
        -6.892180842150753,
        33.953593685424671,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Poney-600x600.jpg",
    ),
    animal(
        "Dromadaire",
        -6.893003137323289,
        33.953380143303519,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/dromadaire.png",
    ),
    animal(
        "Cygnes noirs",
        -6.892441686838461,
        33.954048622043281,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Cygnes_noirs.jpg",
    ),
    animal(
        "Daim européen",
        -6.891922127517889,
        33.954037422649229,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Daim.jpg",
    ),
    animal(
        "Chévre",
        -6.891875154690251,
        33.953723830851921,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Chèvre-nain-600x600.jpg",
    ),
    animal(
        "Perruche",
        -6.893210170756049,
        33.953853300871415,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Perruche.jpg",
    ),
    animal(
        "Mouton soay",
        -6.893645170224637,
        33.953800544963158,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Mouton_soay.jpg",
    ),
    animal(
        "Perroquet",
        -6.89283858870969,
        33.954206035568127,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Perroquet.jpg",
    ),
    animal(
        "Canards",
        -6.892465959279849,
        33.953838192767634,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Canards.jpg",
    ),
    animal(
        "Bovin",
        -6.89273288382914,
        33.953440459941362,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Bovin.jpg",
    ),
    animal(
        "Mouflon à manchette",
        -6.894703286301524,
        33.954549165019102,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Mouflons-600x600.jpg",
    ),
    animal(
        "Hippopotame",
        -6.894583725553247,
        33.952444024608432,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Hippopotame-1-600x600.jpg",
    ),
    animal(
        "Crocodile",
        -6.894850536549303,
        33.952299211653568,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Crocodile-1-600x600.jpg",
    ),
    animal(
        "Pélican",
        -6.895189490788648,
        33.952349452445347,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Pélican.jpeg",
    ),
    animal(
        "Canards",
        -6.89452753669388,
        33.952802305454547,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Canards.jpg",
    ),
    animal(
        "Loutre",
        -6.894290391113994,
        33.953006389476329,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Loutre.jpg",
    ),
    animal(
        "Cygens",
        -6.894579413324924,
        33.953536528137036,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Cygens.jpg",
    ),
    animal(
        "Vrai Roux",
        -6.893889308919515,
        33.953146080794632,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Vrai_Roux.jpg",
    ),
    animal(
        "Chimpanzé",
        -6.89416405214386,
        33.951994680207243,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Chimpanzé-1-600x600.jpg",
    ),
    animal(
        "Cobe lechwé",
        -6.894959829526456,
        33.953206747742833,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Cobe-lechwe-1-600x600.jpg",
    ),
    animal(
        "Ibis chauve",
        -6.893199987724175,
        33.952423611766108,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Ibis-Chauve-600x600.jpg",
    ),
    animal(
        "Cerf",
        -6.893488723723625,
        33.953466074619946,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Cerf.jpg",
    ),
    animal(
        "Mandrill",
        -6.896355934891602,
        33.951601534186196,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Mandrill.jpg",
    ),
    animal(
        "Panthére",
        -6.89663548312604,
        33.951504493580003,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Panthére.jpg",
    ),
    animal(
        "Vautours",
        -6.896632355848397,
        33.952141361871469,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Vautour-fauve-1-600x600.jpg",
    ),
    animal(
        "Fennec",
        -6.896195072026975,
        33.954183883971773,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/fenenc-e1545643887672-600x600.jpg",
    ),
    animal(
        "Porc-épic",
        -6.896033211907156,
        33.954224579955728,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Porc-épic.jpg",
    ),
    animal(
        "Hyène rayée",
        -6.896669632192058,
        33.952407277708915,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Hyène_rayée.jpg",
    ),
    animal(
        "Oryx beisa",
        -6.896543036997123,
        33.954068098339157,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Oryx-beisa-2-600x600.jpg",
    ),
    animal(
        "Lycaon",
        -6.895967711859759,
        33.953086632798993,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Lycaon-2-600x600.jpg",
    ),
    animal(
        "Mangouste",
        -6.896288584756079,
        33.954357369907115,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Mangouste.jpg",
    ),
    animal(
        "Cigogne blanche",
        -6.896641275527356,
        33.953056106974309,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Cigogne_blanche.jpg",
    ),
    animal(
        "Autruche Africaine",
        -6.897671704906049,
        33.952983535304263,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Autruche%20Africaine.jpg",
    ),
    animal(
        "Tortue sulcata",
        -6.896253851995985,
        33.952858264282,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Tortue_sulcata.jpg",
    ),
    animal(
        "Mangouste rayée",
        -6.896544486980803,
        33.95269121859058,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Mangouste_rayée.jpg",
    ),
    animal(
        "Renard",
        -6.895161939038933,
        33.954336946118879,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Renard.jpg",
    ),
    animal(
        "Genette",
        -6.894826826519151,
        33.954572341769627,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Genette.jpg",
    ),
    animal(
        "Buse",
        -6.896769827357678,
        33.952068268092546,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Buse.jpg",
    ),
    animal(
        "Rapaces",
        -6.896946100661076,
        33.951948582845873,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Rapaces.jpg",
    ),
    animal(
        "Ecureuil",
        -6.89642371161221,
        33.952746998351842,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Ecureuil.jpg",
    ),
    animal(
        "Gazelle dorcas",
        -6.896806944506035,
        33.953913873975253,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Gazelle_dorcas.jpg",
    ),
    animal(
        "Serval",
        -6.893228579934036,
        33.95290939124753,
        "https://cdn.jsdelivr.net/gh/DrDoXi/JZN_Animals@main/Serval.jpg",
    ),
];

/// First enclosure listed under `name`.
pub fn find_animal(name: &str) -> Result<&'static Animal, Error> {
    DIRECTORY
        .iter()
        .find(|animal| animal.name == name)
        .ok_or_else(not_found_error)
}

#[test]
fn directory_lists_every_enclosure() {
    assert_eq!(DIRECTORY.len(), 61);
    assert_eq!(DIRECTORY.iter().filter(|a| a.name == "Canards").count(), 2);
    assert!(DIRECTORY.iter().all(|a| a.coordinates.validate().is_ok()));
    assert!(DIRECTORY.iter().all(|a| a.image.starts_with("https://")));
}

#[test]
fn find_animal_by_name() {
    let giraffe = find_animal("Giraphe").unwrap();
    assert_eq!(
        giraffe.coordinates,
        Coordinates::new(-6.898077978828276, 33.952131597882044)
    );
    assert!(giraffe.image.ends_with("/Girafe.jpg"));

    assert_eq!(
        find_animal("Licorne").unwrap_err().code,
        crate::error::NOT_FOUND_ERROR
    );
}
