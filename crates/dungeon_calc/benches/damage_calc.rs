//! Damage calculation throughput benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dungeon_calc::moves::MoveUse;
use dungeon_calc::rng::MockDungeonRng;
use dungeon_calc::{
    simulate_damage_calc, AbilityId, DamageData, DecFx16_16, DungeonState, Monster, MonsterEntity,
    MoveId, SpeciesId, TypeId,
};

fn charizard() -> MonsterEntity {
    let mut monster = Monster::default();
    monster.apparent_id = SpeciesId::Charizard;
    monster.is_team_leader = true;
    monster.level = 50;
    monster.max_hp_stat = 128;
    monster.hp = 128;
    monster.offensive_stats = [73, 80];
    monster.defensive_stats = [69, 68];
    monster.types = [TypeId::Fire, TypeId::Flying];
    monster.abilities[0] = AbilityId::Blaze;
    monster.belly = DecFx16_16::from(100);
    MonsterEntity::new(monster)
}

fn bulbasaur() -> MonsterEntity {
    let mut monster = Monster::default();
    monster.apparent_id = SpeciesId::Bulbasaur;
    monster.is_not_team_member = true;
    monster.level = 50;
    monster.max_hp_stat = 130;
    monster.hp = 130;
    monster.offensive_stats = [63, 69];
    monster.defensive_stats = [64, 64];
    monster.types = [TypeId::Grass, TypeId::Poison];
    monster.abilities[0] = AbilityId::Overgrow;
    monster.belly = DecFx16_16::from(100);
    MonsterEntity::new(monster)
}

fn bench_damage_calc(c: &mut Criterion) {
    c.bench_function("flamethrower_full_pipeline", |b| {
        b.iter(|| {
            let mut dungeon = DungeonState::default();
            dungeon.rng = Box::new(MockDungeonRng::new(false, false, 0.5));
            let mut attacker = charizard();
            let mut defender = bulbasaur();
            let mut details = DamageData::default();
            simulate_damage_calc(
                black_box(&mut details),
                black_box(&mut dungeon),
                black_box(&mut attacker),
                black_box(&mut defender),
                &MoveUse::new(MoveId::Flamethrower),
            )
        })
    });
}

criterion_group!(benches, bench_damage_calc);
criterion_main!(benches);
