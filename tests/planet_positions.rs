mod common;

use approx::assert_abs_diff_eq;
use common::{assert_position_close, position};
use sphera::{
    planets::sphera::SpheraParams,
    ref_system::{ecl_to_equ, equ_to_ecl},
    time::iso_to_djd,
    EclipticPosition, Planet, PlanetId, Sphera, SpheraError,
};

fn all_positions(ctx: &Sphera) -> Vec<EclipticPosition> {
    PlanetId::ALL
        .into_iter()
        .map(|id| Planet::for_id(id).geocentric_position(ctx).unwrap())
        .collect()
}

#[test]
fn test_j2000_apparent() {
    let djd = iso_to_djd("2000-01-01T12:00:00").unwrap();
    assert_abs_diff_eq!(djd, 36525.0, epsilon = 1e-9);

    let ctx = Sphera::create(djd, true).unwrap();
    let expected = [
        position(271.8984904567631, -0.9948788364421088, 1.415517009436084),
        position(241.57326007745868, 2.0664260555024074, 1.1376823650866172),
        position(327.9722301140228, -1.0675735977756338, 1.8495224597405084),
        position(25.255587879828713, -1.2600404833951406, 4.621037043112419),
        position(40.41412297650655, -2.444093343270317, 8.650842574099393),
        position(314.81781267352244, -0.6581579989651868, 20.7277640481482),
        position(303.20963462089605, 0.23479187608402993, 31.024257151531714),
        position(251.31562337426107, 10.857465579156147, 31.0762692225948),
    ];
    for (got, exp) in all_positions(&ctx).iter().zip(&expected) {
        assert_position_close(got, exp, 1e-5);
    }
}

#[test]
fn test_j2000_geometric() {
    let ctx = Sphera::create(36525.0, false).unwrap();
    let expected = [
        position(271.89673438671133, -0.9948642488929251, 1.415517009436084),
        position(241.57269672590982, 2.066297378498532, 1.1376823650866172),
        position(327.9722659252689, -1.067651940181384, 1.8495224597405084),
        position(25.260927437686643, -1.2601615174828134, 4.621037043112419),
        position(40.420853132131015, -2.4443035805407507, 8.650842574099393),
        position(314.8169927199454, -0.6581949898094731, 20.7277640481482),
        position(303.2082630278018, 0.23480092936487507, 31.024257151531714),
        position(251.31443230975142, 10.856944483617497, 31.0762692225948),
    ];
    for (got, exp) in all_positions(&ctx).iter().zip(&expected) {
        assert_position_close(got, exp, 1e-5);
    }
}

#[test]
fn test_2023_apparent() {
    let ctx = Sphera::create(45000.25, true).unwrap();
    let expected = [
        position(355.218282145031, -1.5428507922407624, 1.3568346942179457),
        position(29.778614839399545, 0.1078894550323318, 1.2850990217880873),
        position(85.8806545074338, 2.2322395703631215, 1.3019822952100109),
        position(15.500317926554066, -1.084123623159427, 5.877300438440756),
        position(331.089451256456, -1.2999485308657484, 10.710203943338788),
        position(46.10756640183944, -0.3250199037843504, 20.281445804215213),
        position(355.1630424038223, -1.1692547300371756, 30.905300189907194),
        position(299.35523431233776, -2.3585349746413615, 35.361369999425975),
    ];
    for (got, exp) in all_positions(&ctx).iter().zip(&expected) {
        assert_position_close(got, exp, 1e-5);
    }
}

#[test]
fn test_shared_and_fresh_contexts_agree() {
    let shared = Sphera::create(30700.5, true).unwrap();
    let together = all_positions(&shared);
    for (id, pos) in PlanetId::ALL.into_iter().zip(together) {
        let fresh = Sphera::create(30700.5, true).unwrap();
        assert_eq!(Planet::for_id(id).geocentric_position(&fresh).unwrap(), pos);
    }
}

#[test]
fn test_tight_kepler_settings_barely_move_positions() {
    let params = SpheraParams::builder()
        .apparent(false)
        .kepler_eps(1e-12)
        .build()
        .unwrap();
    let tight = Sphera::with_params(30700.5, &params).unwrap();
    let default = Sphera::create(30700.5, false).unwrap();
    for (a, b) in all_positions(&tight).iter().zip(all_positions(&default)) {
        assert_position_close(a, &b, 1e-4);
    }
}

#[test]
fn test_one_iteration_is_not_enough() {
    let params = SpheraParams::builder().kepler_max_iter(1).build().unwrap();
    assert!(matches!(
        Sphera::with_params(30700.5, &params).and_then(|ctx| {
            Planet::for_id(PlanetId::Mercury).geocentric_position(&ctx)
        }),
        Err(SpheraError::NonConvergence { .. })
    ));
}

#[test]
fn test_lookup_by_name() {
    let ctx = Sphera::create(30700.5, false).unwrap();
    let pos = Planet::for_name("mercury")
        .unwrap()
        .geocentric_position(&ctx)
        .unwrap();
    assert_position_close(&pos, &position(275.88530, 1.47425, 0.98587), 1e-4);
    assert!(matches!(
        Planet::for_name("Ceres"),
        Err(SpheraError::InvalidIdentifier(_))
    ));
}

#[test]
fn test_equatorial_round_trip_of_planet() {
    let ctx = Sphera::create(36525.0, true).unwrap();
    let pos = Planet::for_id(PlanetId::Mars).geocentric_position(&ctx).unwrap();
    let (alpha, delta) = ecl_to_equ(pos.longitude, pos.latitude, ctx.obliquity());
    let (lambda, beta) = equ_to_ecl(alpha, delta, ctx.obliquity());
    assert_abs_diff_eq!(lambda, pos.longitude, epsilon = 1e-9);
    assert_abs_diff_eq!(beta, pos.latitude, epsilon = 1e-9);
}
