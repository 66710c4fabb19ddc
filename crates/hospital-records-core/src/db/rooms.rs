//! Room and room-type operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Room, RoomType};

impl Database {
    /// Insert a new room type.
    pub fn insert_room_type(&self, room_type: &RoomType) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO room_type (id, type) VALUES (?1, ?2)",
            params![room_type.id, room_type.kind],
        )?;
        Ok(())
    }

    /// Get a room type by id.
    pub fn get_room_type(&self, id: i64) -> DbResult<Option<RoomType>> {
        self.conn
            .query_row(
                "SELECT id, type FROM room_type WHERE id = ?",
                [id],
                |row| {
                    Ok(RoomType {
                        id: row.get(0)?,
                        kind: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new room.
    pub fn insert_room(&self, room: &Room) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO room (id, room_type_id, available) VALUES (?1, ?2, ?3)",
            params![room.id, room.room_type_id, room.available],
        )?;
        Ok(())
    }

    /// Get a room by id.
    pub fn get_room(&self, id: i64) -> DbResult<Option<Room>> {
        self.conn
            .query_row(
                "SELECT id, room_type_id, available FROM room WHERE id = ?",
                [id],
                |row| {
                    Ok(Room {
                        id: row.get(0)?,
                        room_type_id: row.get(1)?,
                        available: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List currently available rooms.
    pub fn list_available_rooms(&self) -> DbResult<Vec<Room>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, room_type_id, available FROM room WHERE available = 1 ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Room {
                id: row.get(0)?,
                room_type_id: row.get(1)?,
                available: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
